// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::EncodeError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};

/// A pure transformation from rows to an export payload.
///
/// Implementations hold no mutable state, so one instance can serve any
/// number of requests from any thread.
pub trait Encoder: Send + Sync {
    fn encode(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Blob, EncodeError>;

    fn format(&self) -> ExportFormat;

    fn name(&self) -> &'static str;
}
