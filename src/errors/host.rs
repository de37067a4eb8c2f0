// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Reasons the background export host could not be started.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("background execution is not supported in this runtime")]
    Unsupported,

    #[error("failed to start export host: {0}")]
    SpawnFailed(String),
}
