// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller-facing failures of an export call.

use std::time::Duration;
use thiserror::Error;

use crate::errors::EncodeError;
use crate::table::ExportFormat;

/// Every way `run_export` can fail.
///
/// The `Display` output is the message handed to `on_error` callbacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The requested format tag has no encoder
    #[error("unknown export format '{0}'")]
    UnknownFormat(String),

    /// The encoder failed; the message is the encoder's own error text
    #[error("{0}")]
    Encoding(String),

    /// The background host is gone and the request could not complete there
    #[error("export host error: {0}")]
    HostUnavailable(String),

    /// No response arrived within the processing window
    #[error("processing timeout after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The request was withdrawn by the caller
    #[error("export cancelled")]
    Cancelled,

    /// The same-thread fallback only encodes CSV and Excel
    #[error("{} export is not available without the background host", .0.label())]
    LocalFormatUnsupported(ExportFormat),
}

impl From<EncodeError> for ExportError {
    fn from(error: EncodeError) -> Self {
        ExportError::Encoding(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_mentions_processing_timeout() {
        let error = ExportError::Timeout(Duration::from_secs(300));
        assert_eq!(error.to_string(), "processing timeout after 300s");
    }

    #[test]
    fn test_encode_error_keeps_detail() {
        let error: ExportError = EncodeError::Render("font missing".to_string()).into();
        assert_eq!(error, ExportError::Encoding("PDF rendering failed: font missing".to_string()));
    }

    #[test]
    fn test_local_format_message() {
        let error = ExportError::LocalFormatUnsupported(ExportFormat::Pdf);
        assert_eq!(
            error.to_string(),
            "PDF export is not available without the background host"
        );
    }
}
