// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::{HostRequest, HostResponse};
use crate::encoders::Encoders;
use crate::observability::messages::{host::HostRequestFailed, StructuredLog};

/// Request handler of the background host.
///
/// Built once per host lifetime and moved into the host's unit of execution.
/// It holds only the immutable encoder set, so no request can influence the
/// encoding of a later one.
#[derive(Debug, Clone, Default)]
pub struct ExportHost {
    encoders: Encoders,
}

impl ExportHost {
    pub fn new(encoders: Encoders) -> Self {
        Self { encoders }
    }

    pub fn encoders(&self) -> &Encoders {
        &self.encoders
    }

    /// Encode one request.
    ///
    /// Never fails and never unwinds: encoder errors and encoder panics both
    /// come back as [`HostResponse::Error`] carrying the request id.
    pub fn handle(&self, request: &HostRequest) -> HostResponse {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.encoders
                .encode(request.format, &request.rows, &request.columns)
        }));

        let error = match outcome {
            Ok(Ok(blob)) => {
                return HostResponse::Success {
                    id: request.id.clone(),
                    blob,
                }
            }
            Ok(Err(e)) => e.to_string(),
            Err(payload) => format!("encoder panicked: {}", panic_message(payload.as_ref())),
        };

        HostRequestFailed {
            request_id: request.id.as_str(),
            error: &error,
        }
        .log();

        HostResponse::Error {
            id: request.id.clone(),
            error,
        }
    }
}

/// Best-effort text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
