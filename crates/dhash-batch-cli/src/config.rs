use anyhow::{Context, Result};
use dhash_batch_core::HashConfig;
use std::path::Path;

/// Load a hashing configuration from a JSON file
pub fn load(path: &Path) -> Result<HashConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;

    let config: HashConfig = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    config.validate()?;
    Ok(config)
}

/// Save a hashing configuration as pretty-printed JSON
pub fn save(config: &HashConfig, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create config file {}", path.display()))?;

    serde_json::to_writer_pretty(file, config)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(())
}
