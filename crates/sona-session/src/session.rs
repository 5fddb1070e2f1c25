use std::collections::{BTreeMap, HashMap};

use rand::Rng;

use sona_core::models::{Question, Questionnaire};

/// The fixed store key under which the whole score map is snapshotted.
pub const SCORES_KEY: &str = "assessmentScores";

/// Answers captured for one queued questionnaire, keyed by question id.
/// Created empty when the queue is set; answers overwrite by id.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub questionnaire_id: String,
    pub answers: HashMap<String, f64>,
}

/// One user's working state: the questionnaire queue, the cursors into it,
/// the per-questionnaire answers, and the cross-session score map.
///
/// `current_index` may equal the queue length, which signals a finished
/// session. The question cursor is not range-checked against the current
/// questionnaire's question count — callers must not advance past the last
/// question.
#[derive(Debug, Default)]
pub struct AssessmentSession {
    queue: Vec<Questionnaire>,
    current_index: usize,
    current_question_index: usize,
    responses: Vec<ResponseRecord>,
    pub(crate) scores: BTreeMap<String, f64>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `questionnaires` as the session queue: both cursors reset to
    /// 0 and one empty response record is allocated per entry, in order.
    /// Any prior queue and its records are replaced unconditionally.
    pub fn set_queue(&mut self, questionnaires: Vec<Questionnaire>) {
        self.responses = questionnaires
            .iter()
            .map(|q| ResponseRecord {
                questionnaire_id: q.id.clone(),
                answers: HashMap::new(),
            })
            .collect();
        self.queue = questionnaires;
        self.current_index = 0;
        self.current_question_index = 0;
    }

    /// Shuffle `questionnaires` into a uniformly random order and install
    /// the result via [`set_queue`](Self::set_queue).
    pub fn randomize_queue<R: Rng>(&mut self, mut questionnaires: Vec<Questionnaire>, rng: &mut R) {
        // Fisher–Yates: every ordering equally likely.
        for i in (1..questionnaires.len()).rev() {
            let j = rng.random_range(0..=i);
            questionnaires.swap(i, j);
        }
        self.set_queue(questionnaires);
    }

    /// Empty the queue and its response records and reset the queue cursor.
    /// Persisted scores are untouched.
    pub fn reset_queue(&mut self) {
        self.queue.clear();
        self.responses.clear();
        self.current_index = 0;
    }

    /// Advance to the next questionnaire; a no-op at the last entry.
    pub fn next_assessment(&mut self) {
        if self.current_index + 1 < self.queue.len() {
            self.current_index += 1;
        }
    }

    /// Step back to the previous questionnaire; a no-op at the first entry.
    pub fn previous_assessment(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Advance the question cursor. Not bounds-checked against the current
    /// questionnaire.
    pub fn next_question(&mut self) {
        self.current_question_index += 1;
    }

    pub fn previous_question(&mut self) {
        self.current_question_index = self.current_question_index.saturating_sub(1);
    }

    pub fn current_assessment(&self) -> Option<&Questionnaire> {
        self.queue.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.queue.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_assessment()?
            .questions
            .get(self.current_question_index)
    }

    /// The questionnaire-level answer labels for the current entry; `None`
    /// when there is no current questionnaire or it defines neither options
    /// nor a scale.
    pub fn available_responses(&self) -> Option<Vec<String>> {
        self.current_assessment()?.available_responses()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn queue(&self) -> &[Questionnaire] {
        &self.queue
    }

    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// The cross-session score map, keyed by questionnaire id.
    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    /// Record an answer for the current questionnaire, overwriting any prior
    /// value for that question id. The record is created on demand when
    /// missing (normally pre-allocated by `set_queue`). No validation of the
    /// question id or value is performed; the presentation layer submits
    /// values consistent with the resolved response shape.
    pub fn save_answer(&mut self, question_id: &str, value: f64) {
        while self.responses.len() <= self.current_index {
            let Some(questionnaire) = self.queue.get(self.responses.len()) else {
                return;
            };
            self.responses.push(ResponseRecord {
                questionnaire_id: questionnaire.id.clone(),
                answers: HashMap::new(),
            });
        }
        self.responses[self.current_index]
            .answers
            .insert(question_id.to_string(), value);
    }

    /// Empty the current questionnaire's answers; other records are
    /// untouched. A no-op when there is no record at the cursor.
    pub fn clear_current_responses(&mut self) {
        if let Some(record) = self.responses.get_mut(self.current_index) {
            record.answers.clear();
        }
    }

    pub(crate) fn current_answers(&self) -> Option<&HashMap<String, f64>> {
        self.responses.get(self.current_index).map(|r| &r.answers)
    }
}
