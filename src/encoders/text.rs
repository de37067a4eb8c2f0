// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::TEXT_MIME_TYPE;
use crate::errors::EncodeError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};
use crate::traits::Encoder;

/// Tab-separated plain text table.
///
/// This is the guaranteed output of PDF requests: cells are written raw,
/// without escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl TextEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for TextEncoder {
    fn encode(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Blob, EncodeError> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|column| column.header.as_str())
                .collect::<Vec<_>>()
                .join("\t"),
        );

        for (index, row) in rows.iter().enumerate() {
            lines.push(row.cells(index, columns)?.join("\t"));
        }

        Ok(Blob::new(lines.join("\n"), TEXT_MIME_TYPE))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
