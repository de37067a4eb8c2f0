// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::consts::{
    CSV_MIME_TYPE, EXCEL_MIME_TYPE, PDF_MIME_TYPE, TEXT_MIME_TYPE,
};

/// Encoded export payload together with its MIME type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// UTF-8 view of the payload; `None` for binary payloads such as rendered PDFs.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// File extension matching the MIME type actually produced.
    ///
    /// A PDF request served by the text fallback yields `txt`, not `pdf`.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            CSV_MIME_TYPE => "csv",
            EXCEL_MIME_TYPE => "xls",
            PDF_MIME_TYPE => "pdf",
            TEXT_MIME_TYPE => "txt",
            _ => "bin",
        }
    }

    /// `stem` plus the extension of this payload, e.g. `colleges.csv`.
    pub fn suggested_file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.file_extension())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
