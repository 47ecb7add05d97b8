mod args;
mod generate;

use clap::Parser;
use log::{info, warn};
use snafu::ErrorCompat;

use candidate_synth::GenerationRules;

use crate::args::Args;
use crate::generate::GenerationSettings;

const DEFAULT_INPUT: &str = "assets/kunames.txt";
const DEFAULT_OUTPUT: &str = "assets/dummy_candidates.csv";

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    info!("args: {:?}", args);

    let defaults = GenerationRules::DEFAULT_RULES;
    let settings = GenerationSettings {
        input_path: args.input.unwrap_or_else(|| DEFAULT_INPUT.to_string()),
        output_path: args.out.unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        parties_path: args.parties,
        seed: args.seed,
        rules: GenerationRules {
            min_candidates: args.min_candidates.unwrap_or(defaults.min_candidates),
            max_candidates: args.max_candidates.unwrap_or(defaults.max_candidates),
            ..defaults
        },
    };

    match generate::run_generation(&settings) {
        Ok(summary) => {
            info!(
                "Wrote {} candidates for {} districts",
                summary.records, summary.districts
            );
            println!("Generated {}", settings.output_path);
        }
        Err(e) => {
            warn!("Error occured {:?}", e);
            eprintln!("An error occured: {}", e);
            if let Some(bt) = ErrorCompat::backtrace(&e) {
                eprintln!("trace: {}", bt);
            }
            std::process::exit(1);
        }
    }
}
