// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning rows into an export payload.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// A row holds a non-scalar value under one of the exported keys
    #[error("row {row}: column '{key}' holds an unsupported {kind} value")]
    UnsupportedValue {
        row: usize,
        key: String,
        kind: &'static str,
    },

    /// The PDF renderer could not produce a document
    #[error("PDF rendering failed: {0}")]
    Render(String),
}
