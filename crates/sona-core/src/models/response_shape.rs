use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::{Question, QuestionKind};
use super::questionnaire::Questionnaire;

/// The concrete answer surface for one question, resolved at render time and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseShape {
    /// Ordered selectable labels; the answer is the chosen index.
    Options(Vec<String>),
    /// A numeric range divided into `breakpoints` equal segments.
    Scale { min: f64, max: f64, breakpoints: u32 },
}

impl ResponseShape {
    /// Resolve a question's answer surface: question-level override first,
    /// then the questionnaire-level default, then a hard-coded fallback
    /// (empty option list; `0..10` for sliders).
    ///
    /// Slider `min`/`max` fall back through the questionnaire scale, but
    /// `breakpoints` is always the question's own value — the
    /// questionnaire-level `split` is never consulted for it.
    pub fn resolve(question: &Question, questionnaire: &Questionnaire) -> Self {
        match &question.kind {
            QuestionKind::MultipleChoice { options } => ResponseShape::Options(
                options
                    .clone()
                    .or_else(|| questionnaire.options.clone())
                    .unwrap_or_default(),
            ),
            QuestionKind::Slider { scale, breakpoints } => ResponseShape::Scale {
                min: scale
                    .map(|s| s.min)
                    .or(questionnaire.scale.map(|s| s.min))
                    .unwrap_or(0.0),
                max: scale
                    .map(|s| s.max)
                    .or(questionnaire.scale.map(|s| s.max))
                    .unwrap_or(10.0),
                breakpoints: *breakpoints,
            },
        }
    }
}
