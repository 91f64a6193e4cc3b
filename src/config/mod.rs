//! Configuration management for Paneshift
//!
//! This module handles loading, parsing, and validating configuration
//! from TOML files: the desktop surface, the panel row, the initial
//! progression state, and catalog extensions for shell-defined apps.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tiling::{GeometryError, SurfaceSource};

/// Main configuration struct containing all Paneshift settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaneshiftConfig {
    /// Desktop surface and panel geometry
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Initial progression state for the session
    #[serde(default)]
    pub progression: ProgressionConfig,

    /// Extra window classes beyond the built-in catalog
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// Desktop surface dimensions and panel placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceConfig {
    /// Desktop width (pixels)
    pub width: u32,

    /// Desktop height (pixels)
    pub height: u32,

    /// Panel row height, reserved only once the panel upgrade is
    /// installed (pixels)
    pub panel_height: u32,

    /// Whether the panel docks at the top edge
    pub panel_at_top: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            panel_height: 24,
            panel_at_top: true,
        }
    }
}

impl SurfaceSource for SurfaceConfig {
    fn surface_size(&self) -> Result<(u32, u32), GeometryError> {
        Ok((self.width, self.height))
    }

    fn panel_height(&self) -> u32 {
        self.panel_height
    }

    fn panel_at_top(&self) -> bool {
        self.panel_at_top
    }
}

/// Progression state the session starts with
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProgressionConfig {
    /// Installed upgrade names
    #[serde(default)]
    pub installed: Vec<String>,

    /// Whether the multiplayer connection starts up
    #[serde(default)]
    pub connected: bool,
}

/// One catalog extension entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppEntry {
    /// Window class name
    pub class: String,

    /// Upgrade required before the class may open
    #[serde(default)]
    pub required_upgrade: Option<String>,

    /// Whether the class needs a live multiplayer connection
    #[serde(default)]
    pub multiplayer_only: bool,
}

impl PaneshiftConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PaneshiftConfig =
            toml::from_str(&contents).context("Failed to parse TOML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            anyhow::bail!(
                "Invalid surface size: {}x{}",
                self.surface.width,
                self.surface.height
            );
        }

        if self.surface.panel_height >= self.surface.height {
            anyhow::bail!(
                "Invalid panel_height {}: must be smaller than the surface height",
                self.surface.panel_height
            );
        }

        for entry in &self.apps {
            if entry.class.is_empty() {
                anyhow::bail!("App catalog entries must name a class");
            }
        }

        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, contents).context("Failed to write configuration file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
