// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Every check runs and all problems are reported together, so a broken
//! config file can be fixed in one pass.

use crate::config::consts::MAX_TIMEOUT;
use crate::config::Config;
use crate::errors::ValidationError;

/// Validate a loaded configuration.
///
/// # Examples
/// ```rust
/// use the_tabulator::config::{parse_config, validate_config};
///
/// let config = parse_config("timeout_seconds: 0").unwrap();
/// let errors = validate_config(&config).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match cfg.timeout_seconds {
        Some(0) => errors.push(ValidationError::ZeroTimeout),
        Some(seconds) if seconds > MAX_TIMEOUT.as_secs() => {
            errors.push(ValidationError::TimeoutTooLarge {
                seconds,
                max: MAX_TIMEOUT.as_secs(),
            })
        }
        _ => {}
    }

    if let Some(name) = &cfg.host.thread_name {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyThreadName);
        }
    }

    if let Some(name) = &cfg.excel.sheet_name {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptySheetName);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.iter().for_each(|e| tracing::warn!(error = %e, "invalid export configuration"));
        Err(errors)
    }
}
