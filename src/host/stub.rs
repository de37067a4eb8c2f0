// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only host launcher whose host side is driven by the test itself.

use std::sync::Mutex;
use tokio::sync::mpsc;

use super::{ExportHost, HostChannel, HostRequest, HostResponse};
use crate::errors::HostError;
use crate::traits::HostLauncher;

/// Host side of a [`ManualLauncher`]: the test receives requests and decides
/// when (and whether) to answer. Dropping it simulates a host crash.
pub(crate) struct ManualHost {
    pub host: ExportHost,
    pub requests: mpsc::UnboundedReceiver<HostRequest>,
    pub responses: mpsc::UnboundedSender<HostResponse>,
}

impl ManualHost {
    pub async fn next_request(&mut self) -> HostRequest {
        self.requests.recv().await.expect("client closed the request channel")
    }

    /// Encode `request` with the real handler and send the answer back
    pub fn answer(&self, request: &HostRequest) {
        self.responses
            .send(self.host.handle(request))
            .expect("correlation task is gone");
    }
}

#[derive(Default)]
pub(crate) struct ManualLauncher {
    launched: Mutex<Option<ManualHost>>,
}

impl ManualLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the host side; panics if `launch` was never called
    pub fn take_host(&self) -> ManualHost {
        self.launched
            .lock()
            .unwrap()
            .take()
            .expect("host was not launched")
    }
}

impl HostLauncher for ManualLauncher {
    fn launch(&self, host: ExportHost) -> Result<HostChannel, HostError> {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        *self.launched.lock().unwrap() = Some(ManualHost {
            host,
            requests: request_rx,
            responses: response_tx,
        });

        Ok(HostChannel {
            requests: request_tx,
            responses: response_rx,
        })
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

/// Launcher whose spawn always fails
pub(crate) struct FailingLauncher;

impl HostLauncher for FailingLauncher {
    fn launch(&self, _host: ExportHost) -> Result<HostChannel, HostError> {
        Err(HostError::SpawnFailed("thread limit reached".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
