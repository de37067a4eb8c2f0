// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_HOST_THREAD_NAME, DEFAULT_SHEET_NAME, DEFAULT_TIMEOUT, MAX_TIMEOUT};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Export pipeline configuration.
///
/// Every field is optional; an empty document yields the built-in defaults
/// (background host enabled, 5 minute timeout).
///
/// # Example
/// ```yaml
/// host:
///   enabled: true
///   thread_name: export-host
/// timeout_seconds: 300
/// excel:
///   sheet_name: Applications
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub excel: ExcelConfig,
}

impl Config {
    /// Request timeout, falling back to [`DEFAULT_TIMEOUT`] and capped at
    /// [`MAX_TIMEOUT`].
    pub fn timeout(&self) -> Duration {
        self.timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
            .min(MAX_TIMEOUT)
    }
}

/// Background host options.
///
/// # Fields
/// * `enabled` - `false` forces every export onto the calling thread
/// * `thread_name` - name of the dedicated host thread (optional)
#[derive(Debug, Deserialize)]
pub struct HostConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub thread_name: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thread_name: None,
        }
    }
}

impl HostConfig {
    pub fn get_thread_name(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(DEFAULT_HOST_THREAD_NAME)
    }
}

/// Excel-HTML encoder options.
#[derive(Debug, Default, Deserialize)]
pub struct ExcelConfig {
    pub sheet_name: Option<String>,
}

impl ExcelConfig {
    pub fn get_sheet_name(&self) -> &str {
        self.sheet_name.as_deref().unwrap_or(DEFAULT_SHEET_NAME)
    }
}

/// Parse a config from YAML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    // serde_yaml rejects an empty document, treat it as "all defaults"
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load a config from a YAML file and reject values the pipeline cannot run with
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.host.enabled);
        assert_eq!(cfg.host.get_thread_name(), "export-host");
        assert_eq!(cfg.timeout(), Duration::from_secs(300));
        assert_eq!(cfg.excel.get_sheet_name(), "Export");
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
host:
  enabled: false
  thread_name: report-worker
timeout_seconds: 45
excel:
  sheet_name: Applications
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert!(!cfg.host.enabled);
        assert_eq!(cfg.host.get_thread_name(), "report-worker");
        assert_eq!(cfg.timeout(), Duration::from_secs(45));
        assert_eq!(cfg.excel.get_sheet_name(), "Applications");
    }

    #[test]
    fn test_partial_host_section_keeps_host_enabled() {
        let cfg = parse_config("host:\n  thread_name: exporter\n").unwrap();
        assert!(cfg.host.enabled);
    }

    #[test]
    fn test_load_and_validate_rejects_zero_timeout() {
        let file = write_config("timeout_seconds: 0\n");

        let error = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(_)));
        assert!(error.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_oversized_timeout_is_capped() {
        let cfg = parse_config("timeout_seconds: 100000000\n").unwrap();
        assert_eq!(cfg.timeout(), MAX_TIMEOUT);

        let file = write_config("timeout_seconds: 100000000\n");
        let error = load_and_validate_config(file.path()).unwrap_err();
        assert!(error.to_string().contains("timeout_seconds must not exceed 86400"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let error = parse_config("timeout_seconds: [unclosed").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
