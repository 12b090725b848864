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

use anyhow::Context;

use ava::{AvaBankReader, AvaDataset, AvaInconsistencyDetector, AvaLabelCensus, AvaReporter};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = AvaDataset::default();
    let batch = AvaBankReader::new()
        .read_dataset(&dataset)
        .with_context(|| format!("failed to load question bank {}", dataset.path().display()))?;

    let census = AvaLabelCensus::compute(&batch);
    let findings = AvaInconsistencyDetector::new().detect(&census);

    AvaReporter::new().print(&census, &findings)?;
    Ok(())
}
