// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Problems found while validating a loaded export configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `timeout_seconds` was set to zero, which would time out every request
    ZeroTimeout,
    /// `timeout_seconds` exceeds the longest supported timeout
    TimeoutTooLarge { seconds: u64, max: u64 },
    /// The host thread name was configured but blank
    EmptyThreadName,
    /// The Excel sheet name was configured but blank
    EmptySheetName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroTimeout => {
                write!(f, "timeout_seconds must be greater than zero")
            }
            ValidationError::TimeoutTooLarge { seconds, max } => {
                write!(f, "timeout_seconds must not exceed {max} (got {seconds})")
            }
            ValidationError::EmptyThreadName => {
                write!(f, "host.thread_name must not be empty")
            }
            ValidationError::EmptySheetName => {
                write!(f, "excel.sheet_name must not be empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration validation failed:\n{}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
