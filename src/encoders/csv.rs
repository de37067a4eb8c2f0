// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;

use crate::config::consts::CSV_MIME_TYPE;
use crate::errors::EncodeError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};
use crate::traits::Encoder;

/// CSV encoder - comma separated cells, `\n` between lines.
///
/// Headers are written as-is. A cell is quoted (with inner quotes doubled)
/// only when it contains a comma, a double quote or a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl CsvEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains(|c: char| matches!(c, ',' | '"' | '\n'))
}

fn quote_cell(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

impl Encoder for CsvEncoder {
    fn encode(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Blob, EncodeError> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|column| column.header.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );

        for (index, row) in rows.iter().enumerate() {
            let cells = row.cells(index, columns)?;
            let quoted: Vec<Cow<'_, str>> = cells.iter().map(|cell| quote_cell(cell)).collect();
            lines.push(quoted.join(","));
        }

        Ok(Blob::new(lines.join("\n"), CSV_MIME_TYPE))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
