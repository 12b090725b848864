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

use serde::{Deserialize, Serialize};

use crate::inspect::frequency::AvaLabelCensus;

/// Feminine spelling of the medium difficulty level.
pub const MEDIA_FEMININE: &str = "Média";

/// Masculine spelling of the medium difficulty level.
pub const MEDIO_MASCULINE: &str = "Médio";

/// Separator marking a subject label that spans multiple subjects.
pub const SUBJECT_SEPARATOR: char = '/';

/// A labeling inconsistency observed in the census.
///
/// Findings are transient: computed from the frequency tables, handed to the
/// reporter, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvaFinding {
    /// Both medium-difficulty spellings coexist in the bank.
    MixedDifficultySpelling { media: usize, medio: usize },

    /// Exactly one of the two medium-difficulty spellings is in use.
    UniformDifficultySpelling { label: String, count: usize },

    /// A subject label containing the multi-subject separator.
    CompositeSubject { label: String, count: usize },
}

/// Detects known labeling inconsistencies from a label census.
///
/// The difficulty check is deliberately narrow: it compares the two literal
/// spellings "Média" and "Médio" and nothing else. Other variants of the
/// difficulty labels are out of scope.
#[derive(Clone, Copy, Debug)]
pub struct AvaInconsistencyDetector {
    separator: char,
}

impl AvaInconsistencyDetector {
    pub fn new() -> Self {
        Self {
            separator: SUBJECT_SEPARATOR,
        }
    }

    /// Overrides the composite-subject separator character.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Produces all findings for `census`.
    ///
    /// The difficulty-spelling finding (if any) comes first, followed by one
    /// composite-subject finding per matching label in alphabetical order.
    pub fn detect(&self, census: &AvaLabelCensus) -> Vec<AvaFinding> {
        let mut findings = Vec::new();

        let media = census.difficulties.count(MEDIA_FEMININE);
        let medio = census.difficulties.count(MEDIO_MASCULINE);
        match (media > 0, medio > 0) {
            (true, true) => findings.push(AvaFinding::MixedDifficultySpelling { media, medio }),
            (true, false) => findings.push(AvaFinding::UniformDifficultySpelling {
                label: MEDIA_FEMININE.to_string(),
                count: media,
            }),
            (false, true) => findings.push(AvaFinding::UniformDifficultySpelling {
                label: MEDIO_MASCULINE.to_string(),
                count: medio,
            }),
            (false, false) => {}
        }

        for (label, count) in census.subjects.iter() {
            if label.contains(self.separator) {
                findings.push(AvaFinding::CompositeSubject {
                    label: label.to_string(),
                    count,
                });
            }
        }

        if !findings.is_empty() {
            log::debug!("detected {} labeling findings", findings.len());
        }
        findings
    }
}

impl Default for AvaInconsistencyDetector {
    fn default() -> Self {
        Self::new()
    }
}
