// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::errors::ExportError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};

pub type ProgressCallback = Box<dyn Fn(&str) + Send + Sync>;
pub type SuccessCallback = Box<dyn FnOnce(&Blob, ExportFormat) + Send>;
pub type ErrorCallback = Box<dyn FnOnce(&str) + Send>;

/// Arguments of one export call.
///
/// Rows and columns are held behind `Arc`, so the caller can keep its own
/// handle to the data; the pipeline only ever reads it.
///
/// # Examples
/// ```
/// use the_tabulator::client::ExportOptions;
/// use the_tabulator::table::{ColumnDescriptor, ExportFormat, Row};
///
/// let options = ExportOptions::new(
///     ExportFormat::Excel,
///     vec![Row::new().with("name", "Engineering")],
///     vec![ColumnDescriptor::new("name", "College")],
/// )
/// .on_progress(|message| println!("{message}"))
/// .on_error(|message| eprintln!("export failed: {message}"));
///
/// assert_eq!(options.format(), ExportFormat::Excel);
/// ```
pub struct ExportOptions {
    pub(crate) format: ExportFormat,
    pub(crate) rows: Arc<[Row]>,
    pub(crate) columns: Arc<[ColumnDescriptor]>,
    pub(crate) callbacks: Callbacks,
}

impl ExportOptions {
    pub fn new(
        format: ExportFormat,
        rows: impl Into<Arc<[Row]>>,
        columns: impl Into<Arc<[ColumnDescriptor]>>,
    ) -> Self {
        Self {
            format,
            rows: rows.into(),
            columns: columns.into(),
            callbacks: Callbacks::default(),
        }
    }

    /// Advisory status messages, invoked before dispatch
    pub fn on_progress(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.callbacks.progress = Some(Box::new(callback));
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce(&Blob, ExportFormat) + Send + 'static) -> Self {
        self.callbacks.success = Some(Box::new(callback));
        self
    }

    /// Receives the display text of any [`ExportError`]
    pub fn on_error(mut self, callback: impl FnOnce(&str) + Send + 'static) -> Self {
        self.callbacks.error = Some(Box::new(callback));
        self
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }
}

#[derive(Default)]
pub(crate) struct Callbacks {
    progress: Option<ProgressCallback>,
    success: Option<SuccessCallback>,
    error: Option<ErrorCallback>,
}

impl Callbacks {
    pub(crate) fn progress(&self, message: &str) {
        if let Some(callback) = &self.progress {
            callback(message);
        }
    }

    /// Invoke exactly one of the terminal callbacks for `result`
    pub(crate) fn finish(self, result: &Result<Blob, ExportError>, format: ExportFormat) {
        match result {
            Ok(blob) => {
                if let Some(callback) = self.success {
                    callback(blob, format);
                }
            }
            Err(error) => {
                if let Some(callback) = self.error {
                    callback(&error.to_string());
                }
            }
        }
    }
}
