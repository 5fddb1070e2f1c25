use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interpretation::Interpretation;
use super::question::Question;
use super::response_shape::ResponseShape;

/// Questionnaire-level slider defaults: a range plus the number of equal
/// segments it is divided into when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefaults {
    pub min: f64,
    pub max: f64,
    pub split: u32,
}

/// One standardized screening instrument. Immutable once loaded from the
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: String,
    pub name: String,
    pub summary: String,
    /// Default option labels for multiple-choice questions that carry none.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<Vec<String>>,
    /// Default range for slider questions that carry none.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale: Option<ScaleDefaults>,
    pub questions: Vec<Question>,
    /// Shown to the user alongside the computed score.
    pub explanation: String,
    /// Threshold bands and optional normalization. Absent for instruments
    /// that provide no interpretation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interpretation: Option<Interpretation>,
}

impl Questionnaire {
    /// The answer labels a UI can offer for this questionnaire as a whole:
    /// the default option list, or the default slider range rendered as
    /// `split + 1` evenly spaced tick labels. `None` when the questionnaire
    /// defines neither; callers must handle that.
    pub fn available_responses(&self) -> Option<Vec<String>> {
        if let Some(options) = &self.options {
            return Some(options.clone());
        }
        let scale = self.scale?;
        let step = (scale.max - scale.min) / f64::from(scale.split);
        Some(
            (0..=scale.split)
                .map(|i| format_tick(scale.min + step * f64::from(i)))
                .collect(),
        )
    }

    /// The highest score this questionnaire can produce, in the domain its
    /// interpretation bands see (the score transform is applied when
    /// present). Per question: the max option index for multiple choice,
    /// the resolved max for sliders.
    pub fn max_score(&self) -> f64 {
        let raw: f64 = self
            .questions
            .iter()
            .map(|question| match ResponseShape::resolve(question, self) {
                ResponseShape::Options(options) => options.len().saturating_sub(1) as f64,
                ResponseShape::Scale { max, .. } => max,
            })
            .sum();
        match &self.interpretation {
            Some(interpretation) => interpretation.transform_score(raw),
            None => raw,
        }
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
