// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use super::{CsvEncoder, ExcelEncoder, PdfEncoder};
use crate::errors::EncodeError;
use crate::observability::messages::{encoder::*, StructuredLog};
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};
use crate::traits::{Encoder, PdfRenderer};

/// The encoder set used by the export host: one encoder per [`ExportFormat`].
///
/// Cloning is cheap; the only shared piece is the optional PDF renderer,
/// which is immutable.
///
/// # Examples
/// ```
/// use the_tabulator::encoders::Encoders;
/// use the_tabulator::table::{ColumnDescriptor, ExportFormat, Row};
///
/// let rows = vec![Row::new().with("name", "A,B").with("amount", 5)];
/// let columns = vec![
///     ColumnDescriptor::new("name", "Name"),
///     ColumnDescriptor::new("amount", "Amount"),
/// ];
///
/// let blob = Encoders::new().encode(ExportFormat::Csv, &rows, &columns).unwrap();
/// assert_eq!(blob.as_text(), Some("Name,Amount\n\"A,B\",5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoders {
    csv: CsvEncoder,
    excel: ExcelEncoder,
    pdf: PdfEncoder,
}

impl Encoders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title and worksheet name written into Excel exports
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.excel = ExcelEncoder::with_sheet_name(sheet_name);
        self
    }

    /// Link a full PDF renderer; without one PDF requests produce tabular text
    pub fn with_pdf_renderer(mut self, renderer: Arc<dyn PdfRenderer>) -> Self {
        self.pdf = PdfEncoder::with_renderer(renderer);
        self
    }

    pub fn sheet_name(&self) -> &str {
        self.excel.sheet_name()
    }

    /// The encoder responsible for `format`
    pub fn encoder(&self, format: ExportFormat) -> &dyn Encoder {
        match format {
            ExportFormat::Csv => &self.csv,
            ExportFormat::Excel => &self.excel,
            ExportFormat::Pdf => &self.pdf,
        }
    }

    /// Encode `rows` into `format`, logging the encoding lifecycle
    pub fn encode(
        &self,
        format: ExportFormat,
        rows: &[Row],
        columns: &[ColumnDescriptor],
    ) -> Result<Blob, EncodeError> {
        let encoder = self.encoder(format);

        let start_msg = EncodingStarted {
            encoder: encoder.name(),
            row_count: rows.len(),
            column_count: columns.len(),
        };
        let span = start_msg.span("encode");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        match encoder.encode(rows, columns) {
            Ok(blob) => {
                EncodingCompleted {
                    encoder: encoder.name(),
                    row_count: rows.len(),
                    output_size: blob.len(),
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(blob)
            }
            Err(error) => {
                EncodingFailed {
                    encoder: encoder.name(),
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    /// List all format tags this set can encode
    pub fn list_available_formats() -> Vec<&'static str> {
        ExportFormat::ALL.iter().map(|format| format.tag()).collect()
    }

    /// Check if a format tag is available
    pub fn is_format_available(tag: &str) -> bool {
        tag.parse::<ExportFormat>().is_ok()
    }
}
