//! Ranking engine: keeps scored records sorted under incremental
//! insertion and partitions the ranking into contiguous score tiers.
//!
//! The crate is the core of a loader -> ranker -> presenter pipeline. A
//! loader supplies [`Record`]s, [`rank_records`] sorts and partitions
//! them, and the resulting [`tiers::RankingReport`] hands rows and tier
//! boundaries to an external presenter. The core performs no I/O, no
//! input validation, and no rendering.

pub mod config;
pub mod pipeline;
pub mod ranking;
pub mod record;
pub mod tiers;

pub use config::RankingConfig;
pub use pipeline::rank_records;
pub use ranking::{EmptyCollection, OrderedCollection};
pub use record::Record;
pub use tiers::{InvalidThresholds, RankingReport, Tier, TierRange};
