use log::{debug, info};

use candidate_synth::*;
use snafu::{prelude::*, Snafu};

use serde::Deserialize;

use crate::generate::config_reader::*;
use crate::generate::io_csv::write_records;
use crate::generate::io_districts::read_districts;

mod io_csv;
mod io_districts;

#[derive(Debug, Snafu)]
pub enum GenError {
    #[snafu(display("Error reading districts from {path}: {source}"))]
    ReadingDistricts {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening party file {path}: {source}"))]
    OpeningParties {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing party file {path}: {source}"))]
    ParsingParties {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Invalid party table in {path}: {source}"))]
    InvalidParties { source: SynthError, path: String },
    #[snafu(display("Invalid generation rules: {source}"))]
    InvalidRules { source: SynthError },
    #[snafu(display("Error synthesizing candidates: {source}"))]
    Synthesizing { source: SynthError },
    #[snafu(display("Error creating output file {path}: {source}"))]
    CreatingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing CSV rows to {path}: {source}"))]
    WritingCsv { source: csv::Error, path: String },
    #[snafu(display("Error flushing output file {path}: {source}"))]
    FlushingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error replacing output file {path}: {source}"))]
    PersistingOutput {
        source: std::io::Error,
        path: String,
    },
}

pub type GenResult<T> = Result<T, GenError>;

pub mod config_reader {
    use crate::generate::*;
    use std::fs;

    /// One entry of a JSON party file.
    #[derive(Eq, PartialEq, Debug, Clone, Deserialize)]
    pub struct PartyEntry {
        pub name: String,
        pub color: String,
    }

    /// Reads a party table from a JSON list of `{"name": ..., "color": ...}` objects.
    pub fn read_parties(path: &str) -> GenResult<PartyTable> {
        let contents = fs::read_to_string(path).context(OpeningPartiesSnafu { path })?;
        let entries: Vec<PartyEntry> =
            serde_json::from_str(&contents).context(ParsingPartiesSnafu { path })?;
        debug!("read_parties: {:?}", entries);
        PartyTable::new(
            entries
                .into_iter()
                .map(|e| Party {
                    name: e.name,
                    color: e.color,
                })
                .collect(),
        )
        .context(InvalidPartiesSnafu { path })
    }

    pub fn load_party_table(path: &Option<String>) -> GenResult<PartyTable> {
        match path {
            Some(p) => read_parties(p),
            None => Ok(PartyTable::default_table()),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GenerationSettings {
    pub input_path: String,
    pub output_path: String,
    pub parties_path: Option<String>,
    pub seed: Option<u64>,
    pub rules: GenerationRules,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct GenerationSummary {
    pub districts: usize,
    pub records: usize,
}

/// Loads the districts, synthesizes their candidates and writes them out.
///
/// Nothing is written if the districts or the parties cannot be read.
pub fn run_generation(settings: &GenerationSettings) -> GenResult<GenerationSummary> {
    settings.rules.validate().context(InvalidRulesSnafu {})?;
    let table = load_party_table(&settings.parties_path)?;
    info!("Using {} parties", table.len());

    let districts = read_districts(&settings.input_path)?;
    info!("Loaded {} districts", districts.len());

    let mut sampler = match settings.seed {
        Some(seed) => RngSampler::from_seed(seed),
        None => RngSampler::from_entropy(),
    };
    let records = synthesize_all(&districts, &table, &settings.rules, &mut sampler)
        .context(SynthesizingSnafu {})?;

    write_records(&settings.output_path, &records)?;
    Ok(GenerationSummary {
        districts: districts.len(),
        records: records.len(),
    })
}
