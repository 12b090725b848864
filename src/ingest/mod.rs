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

//! # Question-Bank Ingestion Module
//!
//! This module loads question banks from disk: resolving a dataset label to
//! its source file and reading that file into an in-memory question batch.
//!
//! ## Module Components
//!
//! - **Dataset** ([dataset.rs](dataset/index.html)): Dataset label to source path resolution
//! - **Reader** ([reader.rs](reader/index.html)): Whole-file JSON array loading
//!
//! ## Source Format
//!
//! A question bank is a single UTF-8 text file whose content is one
//! top-level JSON array of question objects. There is no streaming or
//! chunked read; the whole bank is resident in memory before the census
//! runs.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use ava::ingest::{AvaBankReader, AvaDataset};
//!
//! let dataset = AvaDataset::new("Padrão");
//! let reader = AvaBankReader::new();
//! let batch = reader.read_dataset(&dataset)?;
//! ```
//!
//! Loader failures are fatal: a missing file surfaces as
//! `AvaError::SourceNotFound` and anything that is not an array of objects
//! surfaces as `AvaError::MalformedSource`.

pub mod dataset;
pub mod reader;

pub use dataset::AvaDataset;
pub use reader::AvaBankReader;
