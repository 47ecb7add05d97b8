// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A political party that candidates can be attached to.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Party {
    pub name: String,
    /// Display color, as a hex RGB string (`#rrggbb`).
    pub color: String,
}

impl Party {
    pub fn new(name: &str, color: &str) -> Party {
        Party {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// The catalog of parties available for the random assignment.
///
/// The table is never empty and is not modified once built.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PartyTable {
    parties: Vec<Party>,
}

const DEFAULT_PARTIES: [(&str, &str); 9] = [
    ("自由民主党", "#d70035"),
    ("立憲民主党", "#004098"),
    ("日本維新の会", "#88c900"),
    ("公明党", "#f55883"),
    ("日本共産党", "#5a2e87"),
    ("国民民主党", "#fdbd02"),
    ("れいわ新選組", "#e954a4"),
    ("社民党", "#1ca9e9"),
    ("無所属", "#999999"),
];

impl PartyTable {
    pub fn new(parties: Vec<Party>) -> Result<PartyTable, SynthError> {
        if parties.is_empty() {
            return Err(SynthError::EmptyPartyTable);
        }
        Ok(PartyTable { parties })
    }

    /// The nine national parties used when no other table is provided.
    pub fn default_table() -> PartyTable {
        PartyTable {
            parties: DEFAULT_PARTIES
                .iter()
                .map(|(name, color)| Party::new(name, color))
                .collect(),
        }
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// The color bound to a party name, if the party is in the table.
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.parties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.color.as_str())
    }
}

// ******** Output data structures *********

/// One synthesized row: a placeholder candidate running in a district for a party.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateRecord {
    pub district: String,
    pub candidate_name: String,
    pub party_name: String,
    pub color: String,
}

/// Errors that prevent the synthesis from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SynthError {
    EmptyPartyTable,
    InvalidCandidateRange { min: usize, max: usize },
}

impl Error for SynthError {}

impl Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::EmptyPartyTable => write!(f, "the party table is empty"),
            SynthError::InvalidCandidateRange { min, max } => write!(
                f,
                "invalid candidate range [{}, {}]: expected 1 <= min <= max <= {}",
                min, max, MAX_LABELS
            ),
        }
    }
}

// ********* Configuration **********

/// Number of distinct candidate labels ('A' to 'Z').
pub const MAX_LABELS: usize = 26;

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GenerationRules {
    /// Lower bound (inclusive) of candidates per district.
    pub min_candidates: usize,
    /// Upper bound (inclusive) of candidates per district, before clamping
    /// to the size of the party table.
    pub max_candidates: usize,
    pub name_prefix: &'static str,
}

impl GenerationRules {
    pub const DEFAULT_RULES: GenerationRules = GenerationRules {
        min_candidates: 2,
        max_candidates: 5,
        name_prefix: "候補者",
    };

    pub fn validate(&self) -> Result<(), SynthError> {
        if self.min_candidates == 0
            || self.min_candidates > self.max_candidates
            || self.max_candidates > MAX_LABELS
        {
            return Err(SynthError::InvalidCandidateRange {
                min: self.min_candidates,
                max: self.max_candidates,
            });
        }
        Ok(())
    }
}

impl Default for GenerationRules {
    fn default() -> Self {
        GenerationRules::DEFAULT_RULES
    }
}
