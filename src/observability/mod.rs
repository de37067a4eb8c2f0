// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the export pipeline. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names identical between the human-readable and structured output
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::encoder` - Encoding lifecycle and PDF fallback events
//! * `messages::host` - Background host lifecycle events
//! * `messages::client` - Dispatch, correlation, timeout and fallback events
//!
//! # Usage
//!
//! ```rust
//! use the_tabulator::observability::messages::encoder::EncodingFailed;
//! use the_tabulator::observability::messages::StructuredLog;
//! use the_tabulator::errors::EncodeError;
//!
//! let error = EncodeError::Render("no fonts".to_string());
//! let msg = EncodingFailed {
//!     encoder: "pdf",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
