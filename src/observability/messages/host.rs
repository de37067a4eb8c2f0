// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the background export host.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Host thread is up and waiting for requests.
///
/// # Log Level
/// `info!` - Lifecycle event
pub struct HostStarted<'a> {
    pub thread_name: &'a str,
}

impl Display for HostStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Export host '{}' started", self.thread_name)
    }
}

impl StructuredLog for HostStarted<'_> {
    fn log(&self) {
        tracing::info!(thread_name = self.thread_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("host", span_name = name, thread_name = self.thread_name)
    }
}

/// Host thread left its request loop.
///
/// # Log Level
/// `info!` - Lifecycle event
pub struct HostStopped<'a> {
    pub thread_name: &'a str,
    pub handled: usize,
}

impl Display for HostStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export host '{}' stopped after {} requests",
            self.thread_name, self.handled
        )
    }
}

impl StructuredLog for HostStopped<'_> {
    fn log(&self) {
        tracing::info!(
            thread_name = self.thread_name,
            handled = self.handled,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "host_stopped",
            span_name = name,
            thread_name = self.thread_name,
            handled = self.handled,
        )
    }
}

/// Host could not be started; the client runs exports locally.
///
/// # Log Level
/// `warn!` - Degraded behavior
///
/// # Example
/// ```
/// use the_tabulator::observability::messages::host::HostLaunchFailed;
///
/// let msg = HostLaunchFailed {
///     launcher: "thread",
///     reason: "no tokio runtime",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Export host launcher 'thread' unavailable, exporting on the calling thread: no tokio runtime"
/// );
/// ```
pub struct HostLaunchFailed<'a> {
    pub launcher: &'a str,
    pub reason: &'a str,
}

impl Display for HostLaunchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Export host launcher '{}' unavailable, exporting on the calling thread: {}",
            self.launcher, self.reason
        )
    }
}

impl StructuredLog for HostLaunchFailed<'_> {
    fn log(&self) {
        tracing::warn!(launcher = self.launcher, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "host_launch_failed",
            span_name = name,
            launcher = self.launcher,
            reason = self.reason,
        )
    }
}

/// A request failed inside the host and is being reported back as an error message.
///
/// # Log Level
/// `debug!` - The encoder failure itself is already logged as `EncodingFailed`
pub struct HostRequestFailed<'a> {
    pub request_id: &'a str,
    pub error: &'a str,
}

impl Display for HostRequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Export request '{}' failed in host: {}", self.request_id, self.error)
    }
}

impl StructuredLog for HostRequestFailed<'_> {
    fn log(&self) {
        tracing::debug!(request_id = self.request_id, error = self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "host_request_failed",
            span_name = name,
            request_id = self.request_id,
        )
    }
}
