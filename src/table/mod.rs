// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory table model shared by every stage of the export pipeline.
//!
//! Callers hand the pipeline an ordered list of [`ColumnDescriptor`]s and a
//! slice of [`Row`]s. Column order drives output order; rows are open-ended
//! maps and are never mutated. Every encoder produces a [`Blob`].

mod blob;
mod column;
mod format;
mod row;

pub use blob::Blob;
pub use column::ColumnDescriptor;
pub use format::ExportFormat;
pub use row::Row;
