// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::thread;
use tokio::sync::mpsc;

use super::{ExportHost, HostRequest, HostResponse};
use crate::config::consts::DEFAULT_HOST_THREAD_NAME;
use crate::errors::HostError;
use crate::observability::messages::{host::*, StructuredLog};
use crate::traits::HostLauncher;

/// Caller-side ends of a running host.
///
/// Dropping `requests` asks the host to stop. `responses` closing while
/// requests are outstanding means the host died.
#[derive(Debug)]
pub struct HostChannel {
    pub requests: mpsc::UnboundedSender<HostRequest>,
    pub responses: mpsc::UnboundedReceiver<HostResponse>,
}

/// Runs the host on a dedicated, named OS thread.
///
/// The thread blocks on the request channel and handles requests one at a
/// time in arrival order. It exits when the request sender is dropped or
/// the response receiver goes away.
#[derive(Debug, Clone)]
pub struct ThreadHostLauncher {
    thread_name: String,
}

impl ThreadHostLauncher {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
        }
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

impl Default for ThreadHostLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_THREAD_NAME)
    }
}

impl HostLauncher for ThreadHostLauncher {
    fn launch(&self, host: ExportHost) -> Result<HostChannel, HostError> {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<HostRequest>();
        let (response_tx, response_rx) = mpsc::unbounded_channel::<HostResponse>();
        let thread_name = self.thread_name.clone();

        thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                HostStarted {
                    thread_name: &thread_name,
                }
                .log();

                let mut handled = 0;
                while let Some(request) = request_rx.blocking_recv() {
                    let response = host.handle(&request);
                    handled += 1;
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }

                HostStopped {
                    thread_name: &thread_name,
                    handled,
                }
                .log();
            })
            .map_err(|e| HostError::SpawnFailed(e.to_string()))?;

        Ok(HostChannel {
            requests: request_tx,
            responses: response_rx,
        })
    }

    fn name(&self) -> &'static str {
        "thread"
    }
}

/// Launcher for runtimes without background execution; always refuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledHostLauncher;

impl HostLauncher for DisabledHostLauncher {
    fn launch(&self, _host: ExportHost) -> Result<HostChannel, HostError> {
        Err(HostError::Unsupported)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
