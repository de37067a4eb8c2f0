// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::config::Config;
use crate::encoders::Encoders;
use crate::host::{DisabledHostLauncher, ThreadHostLauncher};
use crate::traits::HostLauncher;

/// Export runtime builder - turns a configuration into the pieces an
/// [`ExportClient`](crate::client::ExportClient) is assembled from.
///
/// # Examples
///
/// ```
/// use the_tabulator::config::{parse_config, RuntimeBuilder};
///
/// let config = parse_config("host:\n  enabled: false\ntimeout_seconds: 60").unwrap();
/// let (encoders, _launcher, timeout) = RuntimeBuilder::from_config(&config);
///
/// assert_eq!(encoders.sheet_name(), "Export");
/// assert_eq!(timeout.as_secs(), 60);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the encoder set, host launcher and request timeout.
    ///
    /// A disabled host maps to [`DisabledHostLauncher`], which makes the
    /// client start directly in local mode.
    pub fn from_config(cfg: &Config) -> (Encoders, Box<dyn HostLauncher>, Duration) {
        let encoders = Encoders::new().with_sheet_name(cfg.excel.get_sheet_name());

        let launcher: Box<dyn HostLauncher> = if cfg.host.enabled {
            Box::new(ThreadHostLauncher::new(cfg.host.get_thread_name()))
        } else {
            Box::new(DisabledHostLauncher)
        };

        (encoders, launcher, cfg.timeout())
    }
}
