//! `check` command.

use anyhow::Result;

use crate::config::{ConfigError, SiteConfig};
use crate::log;

/// Validate the loaded config and report every problem at once.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let diag = config.check();
    diag.print_warnings();

    if config.config_path.as_os_str().is_empty() {
        log!("check"; "no config file, defaults are valid");
    }

    diag.into_result().map_err(ConfigError::Diagnostics)?;

    if !config.config_path.as_os_str().is_empty() {
        log!("check"; "{} is valid", config.config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_run_check_ok() {
        assert!(run_check(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_run_check_reports_errors() {
        let config = test_parse_config("[site]\nurl = \"not a url\"");
        let err = run_check(&config).unwrap_err();
        assert!(err.to_string().contains("site.url"));
    }
}
