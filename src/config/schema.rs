use serde::{Deserialize, Serialize};

fn default_thresholds() -> Vec<u64> {
    vec![50, 100, 200]
}

fn default_ascending() -> bool {
    true
}

/// Ranking configuration.
///
/// Defines the tier boundaries and the sort direction. Both fields are
/// optional in the file and fall back to the defaults.
///
/// Example YAML:
/// ```yaml
/// thresholds: [50, 100, 200]
/// ascending: true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    /// Ascending tier boundaries. `k` thresholds produce `k + 1` tiers:
    /// the lowest starts at 0, the highest has no upper bound.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u64>,

    /// Sort direction for the ranking. `true` ranks by score ascending.
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
            ascending: default_ascending(),
        }
    }
}
