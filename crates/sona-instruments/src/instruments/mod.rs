pub mod bai;
pub mod bdi_ii;
pub mod des_ii;
pub mod gad7;
pub mod phq9;
pub mod spin;

use sona_core::models::{Band, Question, QuestionKind};

pub(crate) fn band(min: f64, max: f64, label: &str) -> Band {
    Band {
        min,
        max,
        label: label.to_string(),
    }
}

/// Build multiple-choice questions from an item table. Ids are `q1..qN`;
/// each item text is prefixed with `stem` (pass "" for none). The questions
/// carry no option list of their own and inherit the questionnaire default.
pub(crate) fn choice_questions(stem: &str, items: &[&str]) -> Vec<Question> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Question {
            id: format!("q{}", i + 1),
            text: if stem.is_empty() {
                (*item).to_string()
            } else {
                format!("{stem} {item}")
            },
            kind: QuestionKind::MultipleChoice { options: None },
        })
        .collect()
}
