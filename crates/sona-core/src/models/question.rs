use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Numeric range for a slider question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

/// One item within a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within the owning questionnaire only; two questionnaires may
    /// both have a `q1`.
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// How a question is answered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionKind {
    /// Answered by picking one option; the stored answer is the option's
    /// index. Falls back to the questionnaire's default option list when
    /// `options` is absent.
    MultipleChoice {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        options: Option<Vec<String>>,
    },
    /// Answered by picking a value on a numeric range divided into
    /// `breakpoints` equal segments.
    Slider {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        scale: Option<ScaleRange>,
        breakpoints: u32,
    },
}
