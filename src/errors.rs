//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ava.
//! The Ava project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ava Error Module
//!
//! This module defines the error types and utilities used throughout Ava
//! for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Ava uses a structured error approach with the following principles:
//!
//! - **Explicit Error Types**: Each error variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors include relevant context (source paths, detailed
//!   messages) to aid debugging
//! - **Fail-Fast**: Loader errors are fatal; the audit has no fallback source
//!   and no partial report
//! - **Serde Support**: Errors can be serialized/deserialized for logging and
//!   persistence
//!
//! ## Error Categories
//!
//! - **SourceNotFound**: The question-bank path does not resolve to a readable file
//! - **MalformedSource**: The source content is not the expected array of objects
//! - **Io**: Other filesystem errors, including report write failures
//! - **Serde**: Serialization/deserialization errors

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Ava.
///
/// This is a type alias for `std::result::Result<T, AvaError>` that provides
/// a more concise way to write function signatures that return Ava errors.
pub type Result<T> = std::result::Result<T, AvaError>;

/// Canonical error enumeration for Ava.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum AvaError {
    /// The question-bank source does not resolve to a readable file.
    #[error("source not found: {path}")]
    SourceNotFound { path: String },

    /// The source content cannot be parsed as an array of question objects.
    #[error("malformed source '{path}': {message}")]
    MalformedSource { path: String, message: String },

    /// Errors originating from filesystem IO other than a missing source.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for AvaError {
    fn from(err: io::Error) -> Self {
        AvaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AvaError {
    fn from(err: serde_json::Error) -> Self {
        AvaError::Serde(err.to_string())
    }
}

impl AvaError {
    /// Helper to construct a missing-source error from a path.
    pub fn source_not_found(path: impl AsRef<Path>) -> Self {
        AvaError::SourceNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Helper to construct malformed-source errors.
    pub fn malformed(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        AvaError::MalformedSource {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }
}
