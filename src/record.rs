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

//! # Ava Record Module
//!
//! This module provides the core data structure for representing individual
//! quiz questions. AvaQuestion is the fundamental unit of data that flows
//! through the audit pipeline.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Questions keep their raw JSON object (serde_json::Value)
//!   as the payload, so banks with extra fields load without a strict schema
//! - **Read-only**: Questions are never mutated after load; the audit only
//!   reads the two label fields it recognizes
//! - **Lenient access**: A label field that is absent (or not a string) reads
//!   as the empty string, which the census counts as its own category
//!
//! ## Usage Example
//!
//! ```rust
//! use ava::record::AvaQuestion;
//! use serde_json::json;
//!
//! let question = AvaQuestion::new(
//!     Some("0".to_string()),
//!     json!({"materia": "Matemática", "dificuldade": "Fácil"}),
//! );
//!
//! assert_eq!(question.subject(), "Matemática");
//! assert_eq!(question.difficulty(), "Fácil");
//!
//! // Missing fields default to the empty string
//! let unlabeled = AvaQuestion::new(None, json!({"enunciado": "..."}));
//! assert_eq!(unlabeled.difficulty(), "");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload field holding a question's subject label.
pub const SUBJECT_FIELD: &str = "materia";

/// Payload field holding a question's difficulty label.
pub const DIFFICULTY_FIELD: &str = "dificuldade";

/// A single quiz question as loaded from a question bank.
///
/// The record contains an optional identifier (the loader assigns the
/// position in the source sequence) and the raw question object. Only the
/// `materia` and `dificuldade` fields are interpreted; everything else is
/// carried through untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AvaQuestion {
    /// Optional stable identifier for the question.
    ///
    /// The loader derives it from the question's position in the source
    /// array, which is the only identity a bank entry has.
    pub id: Option<String>,

    /// Raw question object as read from the bank.
    ///
    /// Kept as a JSON value so that banks carrying additional fields
    /// (statement, alternatives, source, …) load without a schema. The
    /// audit never writes back to it.
    pub payload: Value,
}

impl AvaQuestion {
    /// Constructs a question with the given payload and optional identifier.
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        AvaQuestion {
            id: id.into(),
            payload,
        }
    }

    /// Returns the named payload field as a string slice.
    ///
    /// Absent fields and fields holding non-string values both read as the
    /// empty string; the census treats that as the "unlabeled" category.
    pub fn field_str(&self, name: &str) -> &str {
        self.payload.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// The question's subject label (`materia`), `""` when unlabeled.
    pub fn subject(&self) -> &str {
        self.field_str(SUBJECT_FIELD)
    }

    /// The question's difficulty label (`dificuldade`), `""` when unlabeled.
    pub fn difficulty(&self) -> &str {
        self.field_str(DIFFICULTY_FIELD)
    }
}

/// Convenience alias for working on a whole question bank in memory.
pub type AvaQuestionBatch = Vec<AvaQuestion>;
