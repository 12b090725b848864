//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ava.
//! The Ava project belongs to the Dunimd project team.
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

use std::path::{Path, PathBuf};

/// Directory holding question-bank files, relative to the working directory.
const BANK_DIR: &str = "questions";

/// Extension used by question-bank files. The content is JSON; the quiz app
/// that produces these banks names them `.txt`.
const BANK_EXTENSION: &str = "txt";

/// Label of the question bank audited when none is named.
pub const DEFAULT_DATASET: &str = "Padrão";

/// A dataset label together with its source-path resolution.
///
/// A bank labeled `Padrão` lives at `questions/Padrão.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvaDataset {
    label: String,
}

impl AvaDataset {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Path of the bank file this dataset label resolves to.
    pub fn path(&self) -> PathBuf {
        Path::new(BANK_DIR).join(format!("{}.{}", self.label, BANK_EXTENSION))
    }
}

impl Default for AvaDataset {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET)
    }
}
