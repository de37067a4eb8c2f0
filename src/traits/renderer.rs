// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::EncodeError;
use crate::table::{ColumnDescriptor, Row};

/// Optional full PDF layout strategy.
///
/// Injected at composition time through
/// [`Encoders::with_pdf_renderer`](crate::encoders::Encoders::with_pdf_renderer).
/// When none is injected, or rendering fails, PDF requests are served by the
/// tab-separated text encoder.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Vec<u8>, EncodeError>;
}
