mod schema;
mod validation;

pub use schema::RankingConfig;
pub use validation::validate_ranking;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a ranking configuration from a YAML file.
///
/// The core itself never touches the filesystem; this is a convenience
/// for callers that keep thresholds in a config file. The path is always
/// explicit - the library reads no environment and assumes no home
/// directory layout.
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: &Path) -> Result<RankingConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: RankingConfig = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}
