use super::super::answers::TagTally;
use super::super::catalog::Tag;
use super::config::ClassifierConfig;
use super::table::{pair_entry, single_entry, DnaEntry, ALL_ROUND};
use serde::{Deserialize, Serialize};

/// Which regime of the cascade produced the persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaPattern {
    SingleDominant,
    DualDominant,
    Balanced,
    AllRound,
}

/// Count-derived inputs of the cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DominanceSignals {
    pub primary: Tag,
    pub secondary: Tag,
    pub primary_count: u32,
    pub secondary_count: u32,
    pub least_count: u32,
    pub dominance_ratio: f64,
    pub primary_share: f64,
    pub secondary_share: f64,
    pub variance: f64,
}

impl DominanceSignals {
    pub fn from_tally(tally: &TagTally) -> Self {
        let ranked = tally.ranked();
        let (primary, secondary) = (ranked[0], ranked[1]);
        let primary_count = tally.count(primary);
        let secondary_count = tally.count(secondary);
        let least_count = tally.count(ranked[Tag::COUNT - 1]);

        Self {
            primary,
            secondary,
            primary_count,
            secondary_count,
            least_count,
            dominance_ratio: f64::from(primary_count) / f64::from(secondary_count.max(1)),
            primary_share: tally.share(primary),
            secondary_share: tally.share(secondary),
            variance: tally.variance(),
        }
    }
}

pub(crate) fn decide_persona(
    signals: &DominanceSignals,
    config: &ClassifierConfig,
) -> (DnaEntry, DnaPattern) {
    let s = signals;

    // every tag picked, counts within the tolerance of each other
    if s.least_count >= 1 && s.primary_count - s.least_count <= config.even_spread_tolerance {
        return (ALL_ROUND, DnaPattern::AllRound);
    }

    if s.dominance_ratio >= config.single_dominance_ratio
        && s.primary_share >= config.single_primary_share
    {
        return (single_entry(s.primary), DnaPattern::SingleDominant);
    }

    if s.dominance_ratio >= config.dual_dominance_ratio
        && s.primary_share >= config.dual_primary_share
        && s.secondary_share >= config.dual_secondary_share
    {
        return pair_or_all_round(s, DnaPattern::DualDominant);
    }

    if s.primary_share >= config.balanced_primary_share
        && s.secondary_share >= config.balanced_secondary_share
    {
        return pair_or_all_round(s, DnaPattern::Balanced);
    }

    if s.primary_count >= config.fallback_pair_primary_count
        && s.secondary_count >= config.fallback_pair_secondary_count
    {
        return pair_or_all_round(s, DnaPattern::DualDominant);
    }

    if s.primary_count >= config.fallback_single_primary_count {
        return (single_entry(s.primary), DnaPattern::SingleDominant);
    }

    if s.variance < config.low_variance_threshold {
        return (ALL_ROUND, DnaPattern::AllRound);
    }

    if s.primary_count >= config.special_minimum_count
        && s.secondary_count >= config.special_minimum_count
    {
        return pair_or_all_round(s, DnaPattern::Balanced);
    }

    if s.primary_count >= config.special_minimum_count {
        return (single_entry(s.primary), DnaPattern::SingleDominant);
    }

    (ALL_ROUND, DnaPattern::AllRound)
}

fn pair_or_all_round(signals: &DominanceSignals, pattern: DnaPattern) -> (DnaEntry, DnaPattern) {
    pair_entry(signals.primary, signals.secondary)
        .or_else(|| pair_entry(signals.secondary, signals.primary))
        .map(|entry| (entry, pattern))
        .unwrap_or((ALL_ROUND, DnaPattern::AllRound))
}
