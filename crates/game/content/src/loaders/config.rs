//! Combat configuration loader.

use std::path::Path;

use tactics_core::CombatConfig;

use crate::embedded::COMBAT_CONFIG;
use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
///
/// Missing keys fall back to [`CombatConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and range-check config TOML.
    pub fn parse(source: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(COMBAT_CONFIG)
    }
}

fn validate(config: &CombatConfig) -> LoadResult<()> {
    let area = &config.area;
    let unit_interval = |name: &str, value: f64| -> LoadResult<()> {
        if !(0.0..=1.0).contains(&value) {
            anyhow::bail!("area.{} must be within [0, 1], got {}", name, value);
        }
        Ok(())
    };

    unit_interval("falloff_floor", area.falloff_floor)?;
    unit_interval("friendly_fire_ratio", area.friendly_fire_ratio)?;
    if !area.falloff_slope.is_finite() || area.falloff_slope < 0.0 {
        anyhow::bail!(
            "area.falloff_slope must be a non-negative number, got {}",
            area.falloff_slope
        );
    }
    Ok(())
}
