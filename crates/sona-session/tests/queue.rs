use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use sona_core::models::{Question, QuestionKind, Questionnaire};
use sona_session::AssessmentSession;

fn mini(id: &str, question_count: usize) -> Questionnaire {
    Questionnaire {
        id: id.to_string(),
        name: id.to_uppercase(),
        summary: String::new(),
        options: Some(vec!["No".to_string(), "Yes".to_string()]),
        scale: None,
        questions: (0..question_count)
            .map(|i| Question {
                id: format!("q{}", i + 1),
                text: format!("item {}", i + 1),
                kind: QuestionKind::MultipleChoice { options: None },
            })
            .collect(),
        explanation: String::new(),
        interpretation: None,
    }
}

#[test]
fn set_queue_resets_cursors_and_allocates_records() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("a", 2), mini("b", 2)]);
    session.next_assessment();
    session.next_question();
    session.save_answer("q1", 1.0);

    session.set_queue(vec![mini("c", 1)]);

    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_question_index(), 0);
    assert_eq!(session.responses().len(), 1);
    assert_eq!(session.responses()[0].questionnaire_id, "c");
    assert!(session.responses()[0].answers.is_empty());
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("a", 1), mini("b", 1), mini("c", 1)]);

    session.previous_assessment();
    assert_eq!(session.current_index(), 0);

    session.next_assessment();
    session.next_assessment();
    assert_eq!(session.current_index(), 2);

    // Already at the last entry: a no-op, not an error.
    session.next_assessment();
    assert_eq!(session.current_index(), 2);

    session.previous_assessment();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn empty_queue_is_finished_and_has_no_current_state() {
    let session = AssessmentSession::new();
    assert!(session.is_finished());
    assert!(session.current_assessment().is_none());
    assert!(session.current_question().is_none());
    assert!(session.available_responses().is_none());
    assert_eq!(session.compute_score(), 0.0);
}

#[test]
fn current_question_follows_the_question_cursor() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("a", 2)]);

    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("q1"));
    session.next_question();
    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("q2"));

    // Past the end: the engine does not clamp, the query just comes up empty.
    session.next_question();
    assert!(session.current_question().is_none());

    session.previous_question();
    session.previous_question();
    session.previous_question();
    assert_eq!(session.current_question_index(), 0);
}

#[test]
fn current_question_is_none_for_a_question_less_entry() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("empty", 0)]);
    assert!(session.current_question().is_none());
}

#[test]
fn available_responses_come_from_the_current_questionnaire() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("a", 1)]);
    assert_eq!(
        session.available_responses(),
        Some(vec!["No".to_string(), "Yes".to_string()])
    );
}

#[test]
fn reset_queue_discards_session_state() {
    let mut session = AssessmentSession::new();
    session.set_queue(vec![mini("a", 1), mini("b", 1)]);
    session.save_answer("q1", 1.0);
    session.next_assessment();

    session.reset_queue();

    assert!(session.queue().is_empty());
    assert!(session.responses().is_empty());
    assert_eq!(session.current_index(), 0);
    assert!(session.is_finished());
}

#[test]
fn randomize_queue_preserves_the_entries() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = AssessmentSession::new();
    session.randomize_queue(
        vec![mini("a", 1), mini("b", 1), mini("c", 1), mini("d", 1)],
        &mut rng,
    );

    let mut ids: Vec<&str> = session.queue().iter().map(|q| q.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["a", "b", "c", "d"]);
    assert_eq!(session.responses().len(), 4);
    // Records line up with the shuffled order.
    for (entry, record) in session.queue().iter().zip(session.responses()) {
        assert_eq!(entry.id, record.questionnaire_id);
    }
}

// Chi-square goodness-of-fit against the uniform distribution over the 6
// orderings of a 3-element queue. A biased shuffle (e.g. swapping with a
// full-range index) lands far outside the acceptance bound.
#[test]
fn randomize_queue_is_statistically_uniform() {
    let mut rng = SmallRng::seed_from_u64(42);
    let trials = 6000u32;
    let mut counts: HashMap<String, u32> = HashMap::new();

    for _ in 0..trials {
        let mut session = AssessmentSession::new();
        session.randomize_queue(vec![mini("a", 1), mini("b", 1), mini("c", 1)], &mut rng);
        let order: String = session.queue().iter().map(|q| q.id.as_str()).collect();
        *counts.entry(order).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "all 6 orderings must occur");

    let expected = f64::from(trials) / 6.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let delta = f64::from(observed) - expected;
            delta * delta / expected
        })
        .sum();

    // df = 5; 25.7 is roughly the 0.9999 quantile.
    assert!(
        chi_square < 25.0,
        "chi-square {chi_square:.2} too large for a uniform shuffle"
    );
}
