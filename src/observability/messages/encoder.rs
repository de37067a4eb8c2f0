// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for encoder events.
//!
//! This module contains message types for logging events related to:
//! * Encoding lifecycle (start, completion, failure)
//! * PDF renderer fallback to tabular text

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Encoding started.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct EncodingStarted<'a> {
    pub encoder: &'a str,
    pub row_count: usize,
    pub column_count: usize,
}

impl Display for EncodingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Encoder '{}' started: rows={}, columns={}",
            self.encoder, self.row_count, self.column_count
        )
    }
}

impl StructuredLog for EncodingStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            encoder = self.encoder,
            row_count = self.row_count,
            column_count = self.column_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "encoding",
            span_name = name,
            encoder = self.encoder,
            row_count = self.row_count,
            column_count = self.column_count,
        )
    }
}

/// Encoding completed successfully.
///
/// # Log Level
/// `debug!` - Per-request detail
///
/// # Example
/// ```
/// use the_tabulator::observability::messages::encoder::EncodingCompleted;
/// use std::time::Duration;
///
/// let msg = EncodingCompleted {
///     encoder: "csv",
///     row_count: 120,
///     output_size: 4096,
///     duration: Duration::from_millis(3),
/// };
///
/// assert!(msg.to_string().contains("output=4096 bytes"));
/// ```
pub struct EncodingCompleted<'a> {
    pub encoder: &'a str,
    pub row_count: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for EncodingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Encoder '{}' completed: rows={}, output={} bytes, duration={:?}",
            self.encoder, self.row_count, self.output_size, self.duration
        )
    }
}

impl StructuredLog for EncodingCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            encoder = self.encoder,
            row_count = self.row_count,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "encoding_completed",
            span_name = name,
            encoder = self.encoder,
            output_size = self.output_size,
            duration = ?self.duration,
        )
    }
}

/// Encoding failed.
///
/// # Log Level
/// `warn!` - The failure is reported back to the caller, not fatal
pub struct EncodingFailed<'a> {
    pub encoder: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EncodingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Encoder '{}' failed: {}", self.encoder, self.error)
    }
}

impl StructuredLog for EncodingFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            encoder = self.encoder,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "encoding_failed",
            span_name = name,
            encoder = self.encoder,
            error = %self.error,
        )
    }
}

/// PDF output degraded to tab-separated text.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct PdfRendererFallback<'a> {
    pub reason: &'a str,
}

impl Display for PdfRendererFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "PDF export falling back to tabular text: {}", self.reason)
    }
}

impl StructuredLog for PdfRendererFallback<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("pdf_fallback", span_name = name, reason = self.reason)
    }
}
