use serde::{Deserialize, Serialize};

/// Thresholds steering the persona rule cascade. Shares are measured per answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub even_spread_tolerance: u32,
    pub single_dominance_ratio: f64,
    pub single_primary_share: f64,
    pub dual_dominance_ratio: f64,
    pub dual_primary_share: f64,
    pub dual_secondary_share: f64,
    pub balanced_primary_share: f64,
    pub balanced_secondary_share: f64,
    pub fallback_pair_primary_count: u32,
    pub fallback_pair_secondary_count: u32,
    pub fallback_single_primary_count: u32,
    pub low_variance_threshold: f64,
    pub special_minimum_count: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            even_spread_tolerance: 1,
            single_dominance_ratio: 2.0,
            single_primary_share: 0.3,
            dual_dominance_ratio: 1.3,
            dual_primary_share: 0.25,
            dual_secondary_share: 0.15,
            balanced_primary_share: 0.2,
            balanced_secondary_share: 0.15,
            fallback_pair_primary_count: 3,
            fallback_pair_secondary_count: 2,
            fallback_single_primary_count: 4,
            low_variance_threshold: 1.5,
            special_minimum_count: 2,
        }
    }
}
