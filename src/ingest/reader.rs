//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ava.
//! The Ava project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::errors::{AvaError, Result};
use crate::ingest::dataset::AvaDataset;
use crate::record::{AvaQuestion, AvaQuestionBatch};

/// Loads a question bank into memory in one blocking read.
///
/// The source must be a single top-level JSON array of question objects.
/// Records are assigned positional ids `"0"`, `"1"`, … in source order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvaBankReader;

impl AvaBankReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the dataset label to its bank file and reads it.
    pub fn read_dataset(&self, dataset: &AvaDataset) -> Result<AvaQuestionBatch> {
        self.read_path(&dataset.path())
    }

    /// Reads the bank file at `path`.
    ///
    /// A missing file maps to [`AvaError::SourceNotFound`]; content that is
    /// not valid UTF-8 JSON, not a top-level array, or an array with a
    /// non-object entry maps to [`AvaError::MalformedSource`]. Both are
    /// fatal; there is no partial result.
    pub fn read_path(&self, path: &Path) -> Result<AvaQuestionBatch> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AvaError::source_not_found(path),
            io::ErrorKind::InvalidData => AvaError::malformed(path, "source is not valid UTF-8"),
            _ => AvaError::Io(err.to_string()),
        })?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|err| AvaError::malformed(path, err.to_string()))?;

        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(AvaError::malformed(
                    path,
                    format!(
                        "expected a top-level array of question objects, got {}",
                        json_type_name(&other)
                    ),
                ))
            }
        };

        let batch = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                if !entry.is_object() {
                    return Err(AvaError::malformed(
                        path,
                        format!("entry {} is not an object", idx),
                    ));
                }
                Ok(AvaQuestion::new(Some(format!("{}", idx)), entry))
            })
            .collect::<Result<AvaQuestionBatch>>()?;

        log::debug!("loaded {} questions from {}", batch.len(), path.display());
        Ok(batch)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
