//! Application configuration.
//!
//! Read from `{data_dir}/config.yaml`. Every field is optional; families
//! without an override fall back to the built-in catalog.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail, eyre};
use distviz_core::catalog::default_config;
use distviz_core::grid::validate_points;
use distviz_core::{ConfigError, DEFAULT_POINTS, Family, FamilyConfig, Visualizer};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sample points per rendered curve
    pub grid_points: usize,
    /// Tab selected at startup
    pub initial_family: Family,
    /// Per-family replacements for the built-in interval, mode and sliders
    pub distributions: Vec<FamilyConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_points: DEFAULT_POINTS,
            initial_family: Family::Normal,
            distributions: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Load the config file, or defaults if there is none.
    ///
    /// Unlike key bindings, a config file that fails to parse or validate is
    /// an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;
        let config: Self = serde_saphyr::from_str(&content)
            .map_err(|e| eyre!("Failed to parse {}: {e}", path.display()))?;
        config
            .validate()
            .map_err(|e| eyre!("Invalid config {}: {e}", path.display()))?;

        tracing::info!(
            "Loaded config from {} ({} overrides)",
            path.display(),
            config.distributions.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_points(self.grid_points)?;
        for (i, config) in self.distributions.iter().enumerate() {
            if self.distributions[..i]
                .iter()
                .any(|c| c.family == config.family)
            {
                bail!("{} is configured more than once", config.family);
            }
            config.validate()?;
        }
        Ok(())
    }

    /// One config per family in tab order, overrides applied.
    pub fn family_configs(&self) -> Vec<FamilyConfig> {
        Family::ALL
            .iter()
            .map(|&family| {
                self.distributions
                    .iter()
                    .find(|c| c.family == family)
                    .cloned()
                    .unwrap_or_else(|| default_config(family))
            })
            .collect()
    }

    pub fn build_visualizers(&self) -> Result<Vec<Visualizer>, ConfigError> {
        self.family_configs()
            .iter()
            .map(|config| Visualizer::for_distribution(config, self.grid_points))
            .collect()
    }
}
