// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the dispatch/correlation client.
//!
//! This module contains message types for logging events related to:
//! * Request dispatch and completion
//! * Timeouts and late responses
//! * Loss of the background host and the switch to local execution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Export request issued.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_tabulator::observability::messages::client::ExportDispatched;
///
/// let msg = ExportDispatched {
///     request_id: "0190b6a2-7c1e-7d4f-9a55-1c2b3d4e5f60",
///     format: "csv",
///     row_count: 250,
///     mode: "background",
/// };
///
/// assert!(msg.to_string().contains("250 rows"));
/// ```
pub struct ExportDispatched<'a> {
    pub request_id: &'a str,
    pub format: &'a str,
    pub row_count: usize,
    pub mode: &'a str,
}

impl Display for ExportDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export '{}' dispatched: format={}, {} rows, mode={}",
            self.request_id, self.format, self.row_count, self.mode
        )
    }
}

impl StructuredLog for ExportDispatched<'_> {
    fn log(&self) {
        tracing::info!(
            request_id = self.request_id,
            format = self.format,
            row_count = self.row_count,
            mode = self.mode,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "export",
            span_name = name,
            request_id = self.request_id,
            format = self.format,
            row_count = self.row_count,
            mode = self.mode,
        )
    }
}

/// Export resolved with a payload.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ExportCompleted<'a> {
    pub request_id: &'a str,
    pub format: &'a str,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for ExportCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export '{}' completed: format={}, output={} bytes, duration={:?}",
            self.request_id, self.format, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ExportCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            request_id = self.request_id,
            format = self.format,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "export_completed",
            span_name = name,
            request_id = self.request_id,
            duration = ?self.duration,
        )
    }
}

/// Export rejected.
///
/// # Log Level
/// `error!` - Failure surfaced to the caller
pub struct ExportFailed<'a> {
    pub request_id: &'a str,
    pub format: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ExportFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export '{}' failed: format={}, error={}",
            self.request_id, self.format, self.error
        )
    }
}

impl StructuredLog for ExportFailed<'_> {
    fn log(&self) {
        tracing::error!(
            request_id = self.request_id,
            format = self.format,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "export_failed",
            span_name = name,
            request_id = self.request_id,
            error = %self.error,
        )
    }
}

/// No host response within the processing window.
///
/// # Log Level
/// `warn!` - The caller is rejected, the host may still answer later
pub struct ExportTimedOut<'a> {
    pub request_id: &'a str,
    pub timeout: Duration,
}

impl Display for ExportTimedOut<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export '{}' timed out after {:?}",
            self.request_id, self.timeout
        )
    }
}

impl StructuredLog for ExportTimedOut<'_> {
    fn log(&self) {
        tracing::warn!(
            request_id = self.request_id,
            timeout_ms = self.timeout.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "export_timed_out",
            span_name = name,
            request_id = self.request_id,
        )
    }
}

/// A host response arrived for an id that is no longer in flight.
///
/// # Log Level
/// `debug!` - Expected after timeouts and cancellations
pub struct LateResponseIgnored<'a> {
    pub request_id: &'a str,
}

impl Display for LateResponseIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring response for '{}': request is no longer in flight",
            self.request_id
        )
    }
}

impl StructuredLog for LateResponseIgnored<'_> {
    fn log(&self) {
        tracing::debug!(request_id = self.request_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("late_response", span_name = name, request_id = self.request_id)
    }
}

/// The background host failed at runtime; in-flight requests are rejected
/// and later exports run on the calling thread.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct HostLost<'a> {
    pub reason: &'a str,
    pub failed_requests: usize,
}

impl Display for HostLost<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export host lost ({}): failed {} in-flight requests, switching to local execution",
            self.reason, self.failed_requests
        )
    }
}

impl StructuredLog for HostLost<'_> {
    fn log(&self) {
        tracing::error!(
            reason = self.reason,
            failed_requests = self.failed_requests,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "host_lost",
            span_name = name,
            reason = self.reason,
            failed_requests = self.failed_requests,
        )
    }
}
