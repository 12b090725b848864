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

//! # Ava Library
//!
//! Ava audits the labeling of quiz-question banks. It loads a bank (a JSON
//! array of question objects), counts the distinct subject (`materia`) and
//! difficulty (`dificuldade`) labels, flags known labeling inconsistencies,
//! and renders a fixed-format text report.
//!
//! ## Module Overview
//!
//! - **record**: AvaQuestion and the in-memory batch the pipeline runs on
//! - **ingest**: Dataset label resolution and the question-bank loader
//! - **inspect**: Frequency census over the two label fields and the
//!   inconsistency detector
//! - **report**: Fixed-format plain-text report rendering
//! - **errors**: Error taxonomy shared by all stages
//!
//! ## Pipeline
//!
//! The audit is a linear, single-threaded pass:
//!
//! 1. **Load**: the whole bank is read into memory in one blocking read
//! 2. **Census**: one scan tallies each question's subject and difficulty
//! 3. **Detect**: findings are derived from the frequency tables alone
//! 4. **Report**: the census and findings are printed; nothing persists
//!
//! ## Quick Start
//!
//! ```rust
//! use ava::{AvaBankReader, AvaDataset, AvaInconsistencyDetector, AvaLabelCensus, AvaReporter};
//!
//! let batch = AvaBankReader::new().read_dataset(&AvaDataset::default())?;
//! let census = AvaLabelCensus::compute(&batch);
//! let findings = AvaInconsistencyDetector::new().detect(&census);
//! AvaReporter::new().print(&census, &findings)?;
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, AvaError>`. Loader failures
//! (`SourceNotFound`, `MalformedSource`) are fatal: there is no retry and
//! no partial report.

pub mod errors;
pub mod ingest;
pub mod inspect;
pub mod record;
pub mod report;

pub use errors::{AvaError, Result};
pub use record::{AvaQuestion, AvaQuestionBatch, DIFFICULTY_FIELD, SUBJECT_FIELD};

pub use ingest::{AvaBankReader, AvaDataset};
pub use inspect::{AvaFinding, AvaFrequencyTable, AvaInconsistencyDetector, AvaLabelCensus};
pub use report::AvaReporter;
