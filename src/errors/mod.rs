// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod encode;
mod export;
mod host;

pub use config::{ConfigError, ValidationError};
pub use encode::EncodeError;
pub use export::ExportError;
pub use host::HostError;
