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

use ava::record::{AvaQuestion, AvaQuestionBatch};
use serde_json::json;

#[test]
fn new_sets_id_and_payload() {
    let question = AvaQuestion::new(
        Some("7".to_string()),
        json!({"materia": "História", "dificuldade": "Fácil"}),
    );

    assert_eq!(question.id.as_deref(), Some("7"));
    assert_eq!(question.payload["materia"], json!("História"));
}

#[test]
fn label_accessors_read_the_recognized_fields() {
    let question = AvaQuestion::new(
        None,
        json!({"materia": "Matemática", "dificuldade": "Difícil", "enunciado": "..."}),
    );

    assert_eq!(question.subject(), "Matemática");
    assert_eq!(question.difficulty(), "Difícil");
}

#[test]
fn missing_fields_read_as_empty_string() {
    let question = AvaQuestion::new(None, json!({"enunciado": "..."}));

    assert_eq!(question.subject(), "");
    assert_eq!(question.difficulty(), "");
}

#[test]
fn non_string_fields_read_as_empty_string() {
    let question = AvaQuestion::new(None, json!({"materia": 3, "dificuldade": null}));

    assert_eq!(question.subject(), "");
    assert_eq!(question.difficulty(), "");
}

#[test]
fn labels_are_read_verbatim_without_normalization() {
    let question = AvaQuestion::new(None, json!({"materia": "  Física ", "dificuldade": "média"}));

    assert_eq!(question.subject(), "  Física ");
    assert_eq!(question.difficulty(), "média");
}

#[test]
fn batch_alias_preserves_source_order() {
    let batch: AvaQuestionBatch = vec![
        AvaQuestion::new(Some("0".into()), json!({"materia": "Química"})),
        AvaQuestion::new(Some("1".into()), json!({"materia": "Biologia"})),
    ];

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].subject(), "Química");
    assert_eq!(batch[1].subject(), "Biologia");
}
