// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::HostError;
use crate::host::{ExportHost, HostChannel};

/// Starts an [`ExportHost`] in its own unit of execution.
///
/// The returned [`HostChannel`] is the only link between the caller and the
/// host; nothing else is shared. A launcher that cannot provide background
/// execution returns an error and the client stays on the local path.
pub trait HostLauncher: Send + Sync {
    fn launch(&self, host: ExportHost) -> Result<HostChannel, HostError>;

    fn name(&self) -> &'static str;
}
