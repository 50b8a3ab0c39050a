//! Generator policy overrides read from a TOML file.

use anyhow::{Context, Result};
use dungeon_core::GeneratorConfig;
use std::fs;
use std::path::Path;

/// Reads and validates a config. Keys missing from the file keep their defaults.
pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().with_context(|| format!("Rejected config file: {}", path.display()))?;
    Ok(config)
}
