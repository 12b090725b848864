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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::AvaQuestion;

/// Occurrence counts per distinct label value.
///
/// Labels are compared by exact value equality: no trimming, case-folding,
/// or diacritic normalization, so "Média" and "Médio" are distinct entries
/// and the empty string is a label of its own. Iteration is alphabetically
/// ascending (UTF-8 lexicographic order, which equals code-point order).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvaFrequencyTable {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl AvaFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `label`.
    pub fn tally(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `label`, zero when it was never tallied.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Number of distinct labels observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts; equals the number of `tally` calls.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Labels with their counts, alphabetically ascending.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Distinct labels, alphabetically ascending.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Frequency census of the two categorical label fields across a bank.
///
/// Every question contributes exactly one tally to each table (an empty
/// string when the field is missing), so both table totals equal
/// `total_questions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvaLabelCensus {
    pub total_questions: usize,
    pub subjects: AvaFrequencyTable,
    pub difficulties: AvaFrequencyTable,
}

impl AvaLabelCensus {
    /// Builds the census in a single pass over the bank.
    ///
    /// An empty bank yields a zero total and two empty tables.
    pub fn compute(batch: &[AvaQuestion]) -> Self {
        let mut census = AvaLabelCensus {
            total_questions: batch.len(),
            ..AvaLabelCensus::default()
        };

        for question in batch {
            census.subjects.tally(question.subject());
            census.difficulties.tally(question.difficulty());
        }

        log::debug!(
            "census over {} questions: {} subjects, {} difficulty levels",
            census.total_questions,
            census.subjects.distinct(),
            census.difficulties.distinct()
        );
        census
    }
}
