use crate::config::RankingConfig;
use crate::ranking::OrderedCollection;
use crate::record::Record;
use crate::tiers::{partition, InvalidThresholds, RankingReport};

/// Run the full ranking pass: insert every record into an ordered
/// collection keyed on its score, drain it once, partition the sorted
/// records against the configured thresholds, and bind the result into a
/// report for the presenter.
///
/// Single-threaded and synchronous. The collection lives entirely inside
/// this function; the drain invalidates it by moving it, so a double
/// drain cannot happen.
pub fn rank_records(
    records: Vec<Record>,
    config: &RankingConfig,
) -> Result<RankingReport, InvalidThresholds> {
    let mut ranked = OrderedCollection::new(|record: &Record| record.score, config.ascending);
    for record in records {
        ranked.insert(record);
    }

    // The drain yields highest priority first; the partitioner wants
    // ascending scores. With an ascending collection that means a
    // reversal, with a descending one the drain is already ascending.
    let mut sorted: Vec<Record> = ranked.drain_sorted().collect();
    if config.ascending {
        sorted.reverse();
    }

    let tiers = partition(sorted, &config.thresholds)?;
    Ok(RankingReport::new(tiers))
}
