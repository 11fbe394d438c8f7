use super::schema::RankingConfig;

/// Validate a ranking configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_ranking(config: &RankingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, pair) in config.thresholds.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            errors.push(format!(
                "thresholds[{}]: {} must be greater than thresholds[{}] = {}",
                i + 1,
                pair[1],
                i,
                pair[0]
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
