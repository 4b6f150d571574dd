//! Site configuration management for `docseo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── seo        # [seo] and [seo.publisher]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field is optional: a missing config file yields the defaults.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{PublisherConfig, SeoConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `-C` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "docseo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docseo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the loaded config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Deployment SEO settings
    #[serde(default)]
    pub seo: SeoConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing
    /// `docseo.toml` is not an error, every field has a fallback; a file
    /// named with `-C` must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let name = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_NAME));
        let mut config = match find_config_file(name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                debug!("config"; "loaded {}", path.display());
                config.config_path = path;
                config
            }
            // A file named with `-C` has to exist
            None if cli.config.is_some() => {
                log!("error"; "config file '{}' not found", name.display());
                return Err(ConfigError::NotFound(name.to_path_buf()).into());
            }
            None => {
                log!("config"; "'{}' not found, using defaults", name.display());
                Self::default()
            }
        };

        config.apply_cli(cli);
        // `check` reports diagnostics itself
        if !cli.is_check() {
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Apply command line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Collect all diagnostics without failing.
    pub fn check(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);
        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings, returns all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.check();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
