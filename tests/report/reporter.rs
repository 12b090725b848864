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

use ava::inspect::findings::AvaInconsistencyDetector;
use ava::inspect::frequency::AvaLabelCensus;
use ava::record::{AvaQuestion, AvaQuestionBatch};
use ava::report::AvaReporter;
use serde_json::json;

fn render(batch: &AvaQuestionBatch) -> String {
    let census = AvaLabelCensus::compute(batch);
    let findings = AvaInconsistencyDetector::new().detect(&census);
    let mut out = Vec::new();
    AvaReporter::new()
        .render(&census, &findings, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn question(materia: &str, dificuldade: &str) -> AvaQuestion {
    AvaQuestion::new(None, json!({"materia": materia, "dificuldade": dificuldade}))
}

#[test]
fn mixed_bank_renders_the_full_fixed_format_report() {
    let batch = vec![
        question("Matemática", "Fácil"),
        question("Matemática", "Fácil"),
        question("Português/Redação", "Média"),
        question("Física", "Médio"),
    ];

    let expected = r#"============================================================
ANÁLISE DE MATÉRIAS
============================================================

Total de questões: 4

MATÉRIAS ÚNICAS (ordenadas alfabeticamente):
------------------------------------------------------------
 1. 'Física' → 1 questões
 2. 'Matemática' → 2 questões
 3. 'Português/Redação' → 1 questões

Total de matérias diferentes: 3

============================================================
ANÁLISE DE DIFICULDADES
============================================================

DIFICULDADES ÚNICAS:
------------------------------------------------------------
1. 'Fácil' → 2 questões
2. 'Média' → 1 questões
3. 'Médio' → 1 questões

Total de níveis diferentes: 3

============================================================
VERIFICAÇÃO DE INCONSISTÊNCIAS
============================================================

⚠️ ENCONTRADO: Mistura de 'Média' (1) e 'Médio' (1)

⚠️ MATÉRIAS COMPOSTAS ENCONTRADAS (1):
   - 'Português/Redação' → 1 questões

============================================================
"#;

    assert_eq!(render(&batch), expected);
}

#[test]
fn empty_bank_renders_zero_totals_and_no_findings() {
    let output = render(&vec![]);

    assert!(output.contains("Total de questões: 0"));
    assert!(output.contains("Total de matérias diferentes: 0"));
    assert!(output.contains("Total de níveis diferentes: 0"));
    assert!(!output.contains("ENCONTRADO"));
    assert!(!output.contains("Todas usam"));
    assert!(!output.contains("COMPOSTAS"));
}

#[test]
fn uniform_spelling_renders_the_confirmation_marker() {
    let batch = vec![question("Matemática", "Média"), question("Física", "Média")];

    let output = render(&batch);

    assert!(output.contains("✅ Todas usam 'Média' (2 questões)"));
    assert!(!output.contains("⚠️"));
}

#[test]
fn label_lists_are_numbered_contiguously_from_one() {
    let batch = vec![
        question("Química", "Difícil"),
        question("Biologia", "Fácil"),
        question("Física", "Difícil"),
        question("Matemática", "Fácil"),
    ];

    let output = render(&batch);

    let numbers: Vec<usize> = output
        .lines()
        .filter(|line| line.contains(". '") && line.contains("questões"))
        .map(|line| {
            line.split('.')
                .next()
                .unwrap()
                .trim()
                .parse::<usize>()
                .unwrap()
        })
        .collect();

    // Two lists (subjects, difficulties), each numbered 1..=n with no gaps.
    assert_eq!(numbers, vec![1, 2, 3, 4, 1, 2]);
}

#[test]
fn subject_numbers_are_right_aligned_to_width_two() {
    let batch = vec![question("Biologia", "Fácil"), question("Física", "Fácil")];

    let output = render(&batch);

    assert!(output.contains(" 1. 'Biologia' → 1 questões"));
    assert!(output.contains(" 2. 'Física' → 1 questões"));
    // Difficulty numbering is unpadded.
    assert!(output.contains("\n1. 'Fácil' → 2 questões"));
}

#[test]
fn labels_render_in_alphabetical_order() {
    let batch = vec![
        question("Química", "Fácil"),
        question("Biologia", "Fácil"),
        question("Matemática", "Fácil"),
    ];

    let output = render(&batch);

    let biologia = output.find("'Biologia'").unwrap();
    let matematica = output.find("'Matemática'").unwrap();
    let quimica = output.find("'Química'").unwrap();
    assert!(biologia < matematica && matematica < quimica);
}
