/*!
Synthesis of placeholder election candidates.

Each district receives a random number of candidates. Every candidate runs for
a different party, drawn from a [`PartyTable`], and gets a placeholder name
such as `候補者A`.

```
use candidate_synth::*;

let table = PartyTable::default_table();
let mut sampler = RngSampler::from_seed(1);
let records = synthesize_district("千代田区", &table, &GenerationRules::DEFAULT_RULES, &mut sampler)?;
assert!((2..=5).contains(&records.len()));
assert_eq!(records[0].candidate_name, "候補者A");
# Ok::<(), SynthError>(())
```
*/

mod config;
mod sampler;
use log::{debug, info};

pub use crate::config::*;
pub use crate::sampler::*;

/// The placeholder name of the candidate at the given position (0-based).
///
/// Positions map to the letters 'A' to 'Z'. There is no label past 26.
pub fn candidate_label(prefix: &str, position: usize) -> Option<String> {
    if position >= MAX_LABELS {
        return None;
    }
    let letter = char::from(b'A' + position as u8);
    Some(format!("{}{}", prefix, letter))
}

/// Synthesizes the candidates of a single district.
///
/// The number of candidates is drawn from the range of the rules, then capped by the
/// number of parties. Parties are drawn without replacement, so no party appears twice
/// in the same district.
pub fn synthesize_district(
    district: &str,
    table: &PartyTable,
    rules: &GenerationRules,
    sampler: &mut dyn Sampler,
) -> Result<Vec<CandidateRecord>, SynthError> {
    rules.validate()?;
    let drawn = sampler.draw_count(rules.min_candidates, rules.max_candidates);
    let num_candidates = drawn.min(table.len());
    let picks = sampler.pick_indices(table.len(), num_candidates);
    debug!(
        "synthesize_district: {:?}: drawn {} candidates, parties {:?}",
        district, drawn, picks
    );

    // validate() bounds the picks by MAX_LABELS, so every pick gets a label.
    let labels = (0..MAX_LABELS).filter_map(|pos| candidate_label(rules.name_prefix, pos));
    let mut res: Vec<CandidateRecord> = Vec::new();
    for (candidate_name, party_idx) in labels.zip(picks) {
        let party = &table.parties()[party_idx];
        res.push(CandidateRecord {
            district: district.to_string(),
            candidate_name,
            party_name: party.name.clone(),
            color: party.color.clone(),
        });
    }
    Ok(res)
}

/// Synthesizes the candidates for all the districts, in order.
///
/// Duplicated district names are processed independently.
pub fn synthesize_all(
    districts: &[String],
    table: &PartyTable,
    rules: &GenerationRules,
    sampler: &mut dyn Sampler,
) -> Result<Vec<CandidateRecord>, SynthError> {
    rules.validate()?;
    info!(
        "Synthesizing candidates for {} districts with {} parties",
        districts.len(),
        table.len()
    );
    let mut res: Vec<CandidateRecord> = Vec::new();
    for district in districts.iter() {
        let mut records = synthesize_district(district, table, rules, sampler)?;
        res.append(&mut records);
    }
    Ok(res)
}
