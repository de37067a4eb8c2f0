// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller-facing export API.
//!
//! [`ExportClient`] hides whether an export ran on the background host or
//! on the calling thread. Each call resolves exactly once, with a [`Blob`]
//! or an [`ExportError`](crate::errors::ExportError):
//!
//! | Outcome                  | Background mode                 | Local mode                  |
//! |--------------------------|---------------------------------|-----------------------------|
//! | encoded                  | matching host response          | encoded on the caller       |
//! | encoder failure          | host error message              | same error text             |
//! | no answer in time        | `Timeout`                       | n/a                         |
//! | host died                | `HostUnavailable`, then local   | n/a                         |
//! | PDF requested            | encoded by the host             | `LocalFormatUnsupported`    |
//!
//! [`Blob`]: crate::table::Blob

mod correlation;
mod dispatch;
mod options;

#[cfg(test)]
mod integration_tests;

pub use dispatch::{ExecutionMode, ExportClient, ExportHandle};
pub use options::{ErrorCallback, ExportOptions, ProgressCallback, SuccessCallback};
