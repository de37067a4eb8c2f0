// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting it with typed fields at its fixed level.
//!
//! # Organization
//!
//! * `encoder` - Encoding lifecycle and PDF fallback events
//! * `host` - Background host lifecycle events
//! * `client` - Dispatch, correlation, timeout and fallback events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_tabulator::observability::messages::host::HostStarted;
//! use the_tabulator::observability::messages::StructuredLog;
//!
//! let msg = HostStarted {
//!     thread_name: "export-host",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod client;
pub mod encoder;
pub mod host;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with structured fields attached.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
