use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Returned when a score falls outside every declared band.
pub const UNEVALUATED_LABEL: &str = "Unable to evaluate";

/// An inclusive score range mapped to a severity label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

impl Band {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Normalization applied to a raw sum before banding and persistence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreTransform {
    /// Divide by `divisor` and round to `decimals` decimal places.
    DivideBy { divisor: f64, decimals: u32 },
}

impl ScoreTransform {
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            ScoreTransform::DivideBy { divisor, decimals } => {
                let factor = 10f64.powi(*decimals as i32);
                (raw / divisor * factor).round() / factor
            }
        }
    }
}

/// Threshold table for one questionnaire: inclusive ranges evaluated in
/// order, first match wins. Bands may overlap; ordering is significant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub bands: Vec<Band>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transform: Option<ScoreTransform>,
}

impl Interpretation {
    /// Apply the optional transform to a raw sum.
    pub fn transform_score(&self, raw: f64) -> f64 {
        match &self.transform {
            Some(transform) => transform.apply(raw),
            None => raw,
        }
    }

    /// Resolve a (transformed) score to its severity label. A score outside
    /// every band resolves to [`UNEVALUATED_LABEL`].
    pub fn label_for(&self, score: f64) -> &str {
        self.bands
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.label.as_str())
            .unwrap_or(UNEVALUATED_LABEL)
    }
}
