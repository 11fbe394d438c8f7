use serde::Serialize;

use crate::record::Record;
use crate::tiers::partitioner::{Tier, TierRange};

/// Boundary marker for one tier: its position, range, and member count.
/// Presenters use these to print a separator line per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBoundary {
    pub tier_index: usize,
    pub range: TierRange,
    pub member_count: usize,
}

/// One record of the report, paired with its owning tier.
/// `boundary` is `Some` exactly on the last record of each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub record: Record,
    pub tier_index: usize,
    pub range: TierRange,
    pub boundary: Option<TierBoundary>,
}

/// Read-only view binding the ranked records to their assigned tiers.
///
/// The report performs no I/O and holds no presentation state; it hands
/// data to an external presenter. Tier assignment is positional: tiers
/// arrive in ascending range order with members in ascending score order,
/// so walking them front to back yields the full ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingReport {
    tiers: Vec<Tier>,
}

impl RankingReport {
    pub fn new(tiers: Vec<Tier>) -> Self {
        RankingReport { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn record_count(&self) -> usize {
        self.tiers.iter().map(|tier| tier.members.len()).sum()
    }

    /// Boundary markers for every tier, empty ones included, so a
    /// presenter can report "no one reached tier N" without special
    /// cases.
    pub fn summaries(&self) -> Vec<TierBoundary> {
        self.tiers
            .iter()
            .enumerate()
            .map(|(tier_index, tier)| TierBoundary {
                tier_index,
                range: tier.range,
                member_count: tier.members.len(),
            })
            .collect()
    }

    /// Lazily yield `(record, tier)` rows in ascending score order.
    ///
    /// The sequence is finite and non-restartable: it consumes the
    /// report, so it can be walked exactly once. Rows from empty tiers
    /// do not appear; use [`summaries`](Self::summaries) first if empty
    /// tiers matter to the presenter.
    pub fn into_rows(self) -> impl Iterator<Item = ReportRow> {
        self.tiers
            .into_iter()
            .enumerate()
            .flat_map(|(tier_index, tier)| {
                let range = tier.range;
                let member_count = tier.members.len();
                tier.members
                    .into_iter()
                    .enumerate()
                    .map(move |(position, record)| ReportRow {
                        record,
                        tier_index,
                        range,
                        boundary: (position + 1 == member_count).then_some(TierBoundary {
                            tier_index,
                            range,
                            member_count,
                        }),
                    })
            })
    }
}
