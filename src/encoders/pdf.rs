// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::consts::PDF_MIME_TYPE;
use crate::encoders::TextEncoder;
use crate::errors::EncodeError;
use crate::host::panic_message;
use crate::observability::messages::{encoder::PdfRendererFallback, StructuredLog};
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};
use crate::traits::{Encoder, PdfRenderer};

/// PDF encoder - an optional [`PdfRenderer`] layered over the text encoder.
///
/// Without a renderer the output is always the tab-separated text table.
/// With one, its document is returned as `application/pdf`; if it errors or
/// panics the text table is returned instead.
#[derive(Clone, Default)]
pub struct PdfEncoder {
    renderer: Option<Arc<dyn PdfRenderer>>,
    fallback: TextEncoder,
}

impl PdfEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: Arc<dyn PdfRenderer>) -> Self {
        Self {
            renderer: Some(renderer),
            fallback: TextEncoder::new(),
        }
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    fn render(
        renderer: &dyn PdfRenderer,
        rows: &[Row],
        columns: &[ColumnDescriptor],
    ) -> Result<Vec<u8>, String> {
        match panic::catch_unwind(AssertUnwindSafe(|| renderer.render(rows, columns))) {
            Ok(Ok(document)) => Ok(document),
            Ok(Err(e)) => Err(e.to_string()),
            Err(payload) => Err(format!("renderer panicked: {}", panic_message(payload.as_ref()))),
        }
    }
}

impl std::fmt::Debug for PdfEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfEncoder")
            .field("has_renderer", &self.has_renderer())
            .finish()
    }
}

impl Encoder for PdfEncoder {
    fn encode(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Blob, EncodeError> {
        if let Some(renderer) = &self.renderer {
            // Bad cell values fail the request outright instead of degrading to text.
            for (index, row) in rows.iter().enumerate() {
                row.cells(index, columns)?;
            }

            match Self::render(renderer.as_ref(), rows, columns) {
                Ok(document) => return Ok(Blob::new(document, PDF_MIME_TYPE)),
                Err(reason) => PdfRendererFallback { reason: &reason }.log(),
            }
        }

        self.fallback.encode(rows, columns)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
