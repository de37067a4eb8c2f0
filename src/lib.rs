// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod client;        // dispatch + correlation, local fallback
pub mod config;        // yaml config + runtime builder
pub mod encoders;      // csv / excel-html / pdf
pub mod errors;        // error handling
pub mod host;          // background execution host
pub mod observability;
pub mod table;         // rows, columns, formats, blobs
pub mod traits;        // unified abstractions

pub use client::{ExecutionMode, ExportClient, ExportOptions};
pub use errors::ExportError;
pub use table::{Blob, ColumnDescriptor, ExportFormat, Row};
