// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format encoders for the export pipeline.
//!
//! Every encoder is a pure function of `(rows, columns)`: no I/O, no shared
//! mutable state. The [`Encoders`] set owns one encoder per [`ExportFormat`]
//! and dispatches with an exhaustive match, so adding a format is a compile
//! error until every encoder path handles it.
//!
//! | Format | Encoder          | MIME type                                |
//! |--------|------------------|------------------------------------------|
//! | CSV    | [`CsvEncoder`]   | `text/csv;charset=utf-8`                 |
//! | Excel  | [`ExcelEncoder`] | `application/vnd.ms-excel;charset=utf-8` |
//! | PDF    | [`PdfEncoder`]   | `application/pdf` or the text fallback   |
//! | (text) | [`TextEncoder`]  | `text/plain;charset=utf-8`               |
//!
//! [`ExportFormat`]: crate::table::ExportFormat

pub mod csv;
pub mod excel;
pub mod factory;
pub mod pdf;
pub mod text;

pub use self::csv::CsvEncoder;
pub use excel::ExcelEncoder;
pub use factory::Encoders;
pub use pdf::PdfEncoder;
pub use text::TextEncoder;

