// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

/// Time a dispatched request may stay in flight before it is failed (5 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300_000);
/// Longest accepted request timeout (1 day), well inside the timer wheel's range
pub const MAX_TIMEOUT: Duration = Duration::from_secs(86_400);
/// Name given to the background host thread
pub const DEFAULT_HOST_THREAD_NAME: &str = "export-host";
/// Worksheet name and document title of Excel exports
pub const DEFAULT_SHEET_NAME: &str = "Export";

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";
pub const EXCEL_MIME_TYPE: &str = "application/vnd.ms-excel;charset=utf-8";
pub const TEXT_MIME_TYPE: &str = "text/plain;charset=utf-8";
pub const PDF_MIME_TYPE: &str = "application/pdf";
