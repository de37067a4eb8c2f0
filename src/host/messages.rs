// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::ExportError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};

/// Correlation id of one export call.
///
/// Generated by the client as a UUIDv7: a millisecond timestamp followed by
/// random bits, so ids are unique among in-flight requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Request sent to the host.
///
/// Rows and columns are shared with the caller through `Arc`, the host only
/// reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRequest {
    pub id: RequestId,
    #[serde(rename = "type")]
    pub format: ExportFormat,
    #[serde(rename = "data")]
    pub rows: Arc<[Row]>,
    pub columns: Arc<[ColumnDescriptor]>,
}

/// Response emitted by the host, tagged with the originating request id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostResponse {
    Success { id: RequestId, blob: Blob },
    Error { id: RequestId, error: String },
}

impl HostResponse {
    pub fn id(&self) -> &RequestId {
        match self {
            HostResponse::Success { id, .. } | HostResponse::Error { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HostResponse::Success { .. })
    }

    /// Caller-facing outcome; host error strings become [`ExportError::Encoding`]
    pub fn into_result(self) -> Result<Blob, ExportError> {
        match self {
            HostResponse::Success { blob, .. } => Ok(blob),
            HostResponse::Error { error, .. } => Err(ExportError::Encoding(error)),
        }
    }
}
