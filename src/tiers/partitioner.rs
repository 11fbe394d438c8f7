use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Error returned when a threshold list is not strictly ascending.
/// Fatal to the partitioning call: no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidThresholds {
    NotStrictlyAscending { index: usize, prev: u64, value: u64 },
}

impl fmt::Display for InvalidThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidThresholds::NotStrictlyAscending { index, prev, value } => write!(
                f,
                "thresholds must be strictly ascending: thresholds[{}] = {} does not exceed {}",
                index, value, prev
            ),
        }
    }
}

impl std::error::Error for InvalidThresholds {}

/// A half-open score band `[low, high)`. `high = None` marks the top
/// tier, which is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRange {
    pub low: u64,
    pub high: Option<u64>,
}

impl TierRange {
    /// Whether `score` falls within the band: inclusive low, exclusive
    /// high. A score equal to a threshold belongs to the band that
    /// starts there, never the one below it.
    pub fn contains(&self, score: u64) -> bool {
        score >= self.low && self.high.map_or(true, |high| score < high)
    }
}

impl fmt::Display for TierRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "{} - {}", self.low, high),
            // "N+" marks the lack of an upper bound
            None => write!(f, "{}+", self.low),
        }
    }
}

/// A contiguous score band and the records whose score falls within it.
/// Members are kept in the order they arrived, which is ascending-score
/// order when the input came from a drained ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub range: TierRange,
    pub members: Vec<Record>,
}

/// Build the empty tier list for a threshold list: `thresholds.len() + 1`
/// bands covering `[0, t0)`, `[t0, t1)`, ..., `[t_last, +inf)`. The lowest
/// band always starts at 0 and the highest has no upper bound.
pub fn build_tiers(thresholds: &[u64]) -> Result<Vec<Tier>, InvalidThresholds> {
    for (index, pair) in thresholds.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(InvalidThresholds::NotStrictlyAscending {
                index: index + 1,
                prev: pair[0],
                value: pair[1],
            });
        }
    }

    let mut tiers = Vec::with_capacity(thresholds.len() + 1);
    let mut low = 0;
    for &threshold in thresholds {
        tiers.push(Tier {
            range: TierRange {
                low,
                high: Some(threshold),
            },
            members: Vec::new(),
        });
        low = threshold;
    }
    tiers.push(Tier {
        range: TierRange { low, high: None },
        members: Vec::new(),
    });
    Ok(tiers)
}

/// Assign each record to the first tier whose range contains its score.
///
/// `sorted` is expected in ascending score order (a drained ranking,
/// normalized); the partitioner does not re-sort, so within-tier order
/// equals input order. Every tier is returned, empty ones included, so a
/// presenter can report "no one reached tier N" without special cases.
pub fn partition(
    sorted: Vec<Record>,
    thresholds: &[u64],
) -> Result<Vec<Tier>, InvalidThresholds> {
    let mut tiers = build_tiers(thresholds)?;
    let top = tiers.len() - 1;
    for record in sorted {
        // The bands are contiguous from 0 and the last is unbounded, so
        // first-match always finds a home; the fallback is unreachable.
        let index = tiers
            .iter()
            .position(|tier| tier.range.contains(record.score))
            .unwrap_or(top);
        tiers[index].members.push(record);
    }
    Ok(tiers)
}
