use std::collections::BTreeMap;

use tracing::{info, warn};

use sona_core::models::QuestionKind;
use sona_storage::KeyValueStore;

use crate::error::SessionError;
use crate::session::{AssessmentSession, SCORES_KEY};

/// A stored answer of 0 is skipped during scoring, so a first-option
/// (index 0) choice answer cannot be told apart from an unanswered
/// question. This matches the shipped behavior of the instrument UIs and
/// is flagged as a likely defect; do not change without product
/// confirmation.
pub const TREAT_ZERO_AS_UNANSWERED: bool = true;

/// Sentinel stored by choice UIs that expose an explicit "no answer"
/// option. Excluded from choice sums; slider values are never sentinels.
pub const NO_ANSWER: f64 = -1.0;

impl AssessmentSession {
    /// Unweighted sum of the current questionnaire's stored answers.
    /// Returns 0 when there is no current questionnaire. Unanswered
    /// questions contribute nothing, choice answers equal to [`NO_ANSWER`]
    /// are excluded, and slider answers always add. No normalization or
    /// capping happens here; that is the interpretation step's job.
    pub fn compute_score(&self) -> f64 {
        let Some(questionnaire) = self.current_assessment() else {
            return 0.0;
        };
        let answers = self.current_answers();

        let mut score = 0.0;
        for question in &questionnaire.questions {
            let Some(&answer) = answers.and_then(|a| a.get(&question.id)) else {
                continue;
            };
            if TREAT_ZERO_AS_UNANSWERED && answer == 0.0 {
                continue;
            }
            match &question.kind {
                QuestionKind::MultipleChoice { .. } => {
                    if answer != NO_ANSWER {
                        score += answer;
                    }
                }
                QuestionKind::Slider { .. } => {
                    score += answer;
                }
            }
        }
        score
    }

    /// Compute the current questionnaire's score, normalize it when the
    /// instrument defines a transform, record it under the questionnaire id,
    /// and snapshot the entire score map to `store` as one write under
    /// [`SCORES_KEY`]. A no-op when there is no current questionnaire.
    pub fn save_score(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        let raw = self.compute_score();
        let Some(questionnaire) = self.current_assessment() else {
            return Ok(());
        };
        let id = questionnaire.id.clone();
        let score = match &questionnaire.interpretation {
            Some(interpretation) => interpretation.transform_score(raw),
            None => raw,
        };

        self.scores.insert(id.clone(), score);
        let snapshot = serde_json::to_string(&self.scores)?;
        store.set(SCORES_KEY, &snapshot)?;
        info!(questionnaire = %id, score, "score saved");
        Ok(())
    }

    /// Replace the in-memory score map with the persisted snapshot. A
    /// missing snapshot leaves the map as-is; an unparseable one is
    /// discarded and the map reset to empty, with a diagnostic.
    pub fn load_scores(&mut self, store: &dyn KeyValueStore) -> Result<(), SessionError> {
        let Some(snapshot) = store.get(SCORES_KEY)? else {
            return Ok(());
        };
        match serde_json::from_str(&snapshot) {
            Ok(scores) => self.scores = scores,
            Err(err) => {
                warn!(%err, "discarding malformed score snapshot");
                self.scores = BTreeMap::new();
            }
        }
        Ok(())
    }

    /// Severity label for the current questionnaire: its saved score when
    /// one exists, otherwise a fresh (transformed) computation, resolved
    /// through the instrument's band table. `None` when there is no current
    /// questionnaire or it defines no interpretation.
    pub fn score_evaluation(&self) -> Option<String> {
        let questionnaire = self.current_assessment()?;
        let interpretation = questionnaire.interpretation.as_ref()?;
        let score = self
            .scores
            .get(&questionnaire.id)
            .copied()
            .unwrap_or_else(|| interpretation.transform_score(self.compute_score()));
        Some(interpretation.label_for(score).to_string())
    }
}
