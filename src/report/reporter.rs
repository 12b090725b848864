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

use std::io::{self, Write};

use crate::errors::Result;
use crate::inspect::findings::AvaFinding;
use crate::inspect::frequency::AvaLabelCensus;

const BANNER_WIDTH: usize = 60;

/// Renders the audit report as plain text.
///
/// The output sequence is fixed: subject analysis, difficulty analysis,
/// then the inconsistency section. Labels are listed alphabetically and
/// numbered from 1; all user-facing text is Portuguese, matching the quiz
/// app the banks come from.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvaReporter;

impl AvaReporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the full report to `out`.
    ///
    /// The report is the reporter's only effect; nothing is returned for
    /// other stages to consume.
    pub fn render<W: Write>(
        &self,
        census: &AvaLabelCensus,
        findings: &[AvaFinding],
        out: &mut W,
    ) -> Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let rule = "-".repeat(BANNER_WIDTH);

        writeln!(out, "{}", banner)?;
        writeln!(out, "ANÁLISE DE MATÉRIAS")?;
        writeln!(out, "{}", banner)?;
        writeln!(out)?;
        writeln!(out, "Total de questões: {}", census.total_questions)?;
        writeln!(out)?;

        writeln!(out, "MATÉRIAS ÚNICAS (ordenadas alfabeticamente):")?;
        writeln!(out, "{}", rule)?;
        for (idx, (label, count)) in census.subjects.iter().enumerate() {
            writeln!(out, "{:>2}. '{}' → {} questões", idx + 1, label, count)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Total de matérias diferentes: {}",
            census.subjects.distinct()
        )?;
        writeln!(out)?;

        writeln!(out, "{}", banner)?;
        writeln!(out, "ANÁLISE DE DIFICULDADES")?;
        writeln!(out, "{}", banner)?;
        writeln!(out)?;
        writeln!(out, "DIFICULDADES ÚNICAS:")?;
        writeln!(out, "{}", rule)?;
        for (idx, (label, count)) in census.difficulties.iter().enumerate() {
            writeln!(out, "{}. '{}' → {} questões", idx + 1, label, count)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Total de níveis diferentes: {}",
            census.difficulties.distinct()
        )?;
        writeln!(out)?;

        writeln!(out, "{}", banner)?;
        writeln!(out, "VERIFICAÇÃO DE INCONSISTÊNCIAS")?;
        writeln!(out, "{}", banner)?;

        let mut composites: Vec<(&str, usize)> = Vec::new();
        for finding in findings {
            match finding {
                AvaFinding::MixedDifficultySpelling { media, medio } => {
                    writeln!(out)?;
                    writeln!(
                        out,
                        "⚠️ ENCONTRADO: Mistura de 'Média' ({}) e 'Médio' ({})",
                        media, medio
                    )?;
                }
                AvaFinding::UniformDifficultySpelling { label, count } => {
                    writeln!(out)?;
                    writeln!(out, "✅ Todas usam '{}' ({} questões)", label, count)?;
                }
                AvaFinding::CompositeSubject { label, count } => {
                    composites.push((label, *count));
                }
            }
        }

        if !composites.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "⚠️ MATÉRIAS COMPOSTAS ENCONTRADAS ({}):",
                composites.len()
            )?;
            for (label, count) in composites {
                writeln!(out, "   - '{}' → {} questões", label, count)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", banner)?;
        out.flush()?;
        Ok(())
    }

    /// Renders the report to standard output.
    pub fn print(&self, census: &AvaLabelCensus, findings: &[AvaFinding]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render(census, findings, &mut handle)
    }
}
