use clap::Parser;

/// Generates dummy election candidates for a list of electoral districts.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, default assets/kunames.txt) The list of districts, one name per line.
    /// Blank lines are ignored.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, default assets/dummy_candidates.csv) Where the generated candidates are written in CSV
    /// format. An existing file is replaced.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path, optional) A JSON file with the parties to draw from, as a list of
    /// {"name": ..., "color": "#rrggbb"} objects. The built-in table of national parties is used otherwise.
    #[clap(short, long, value_parser)]
    pub parties: Option<String>,

    /// (integer, optional) Seed for the random generator. Two runs with the same seed and inputs
    /// produce the same output.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// (default 2) The minimum number of candidates in a district.
    #[clap(long, value_parser)]
    pub min_candidates: Option<usize>,

    /// (default 5) The maximum number of candidates in a district. It is also capped by the number of parties.
    #[clap(long, value_parser)]
    pub max_candidates: Option<usize>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
