mod partitioner;
mod report;

pub use partitioner::{build_tiers, partition, InvalidThresholds, Tier, TierRange};
pub use report::{RankingReport, ReportRow, TierBoundary};
