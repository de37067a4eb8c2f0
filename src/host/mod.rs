// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Background execution host for the export pipeline.
//!
//! The host runs the encoders away from the caller so large exports never
//! block it. The only link between the two sides is a pair of channels
//! carrying [`HostRequest`] and [`HostResponse`] messages:
//!
//! ```text
//! ExportClient --HostRequest--> [ export-host thread: ExportHost::handle ] --HostResponse--> correlation task
//! ```
//!
//! # Pieces
//!
//! - [`ExportHost`]: explicit, stateless handler object; turns every encoder
//!   failure (including panics) into an error message
//! - [`ThreadHostLauncher`]: runs an `ExportHost` on a dedicated named thread
//! - [`DisabledHostLauncher`]: reports background execution as unsupported,
//!   forcing the client onto the calling thread

mod handler;
mod launcher;
mod messages;
#[cfg(test)]
pub(crate) mod stub;

pub use handler::ExportHost;
pub(crate) use handler::panic_message;
pub use launcher::{DisabledHostLauncher, HostChannel, ThreadHostLauncher};
pub use messages::{HostRequest, HostResponse, RequestId};
