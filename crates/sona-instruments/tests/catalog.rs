use std::collections::HashSet;

use sona_core::models::{QuestionKind, UNEVALUATED_LABEL};
use sona_instruments::{all_questionnaires, categories, get_questionnaire};

#[test]
fn registry_finds_every_catalog_entry() {
    for questionnaire in all_questionnaires() {
        let found = get_questionnaire(&questionnaire.id)
            .unwrap_or_else(|| panic!("{} missing from registry", questionnaire.id));
        assert_eq!(found.name, questionnaire.name);
    }
    assert!(get_questionnaire("no-such-instrument").is_none());
}

#[test]
fn categories_group_the_expected_instruments() {
    let ids: Vec<&str> = categories().iter().map(|c| c.id).collect();
    assert_eq!(ids, ["anxiety", "depressive", "dissociation"]);

    let all: Vec<&str> = all_questionnaires().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(all, ["gad-7", "spin", "bai", "phq-9", "bdi-ii", "des-ii"]);
}

#[test]
fn question_counts_match_the_instruments() {
    let counts = [
        ("gad-7", 7),
        ("spin", 17),
        ("bai", 21),
        ("phq-9", 9),
        ("bdi-ii", 0),
        ("des-ii", 28),
    ];
    for (id, expected) in counts {
        let q = get_questionnaire(id).unwrap();
        assert_eq!(q.questions.len(), expected, "{id}");
    }
}

#[test]
fn question_ids_are_unique_within_each_questionnaire() {
    for questionnaire in all_questionnaires() {
        let mut seen = HashSet::new();
        for question in &questionnaire.questions {
            assert!(
                seen.insert(&question.id),
                "{}: duplicate question id {}",
                questionnaire.id,
                question.id
            );
        }
    }
}

#[test]
fn des_ii_items_are_percentage_sliders() {
    let des = get_questionnaire("des-ii").unwrap();
    for question in &des.questions {
        match &question.kind {
            QuestionKind::Slider { scale, breakpoints } => {
                let scale = (*scale).expect("des-ii items carry their own range");
                assert_eq!((scale.min, scale.max), (0.0, 100.0));
                assert_eq!(*breakpoints, 10);
            }
            QuestionKind::MultipleChoice { .. } => {
                panic!("des-ii must contain only slider items")
            }
        }
    }
}

// Every integer score from 0 to the instrument's maximum must resolve to a
// real label. A gap in the band table is a catalog defect.
#[test]
fn bands_cover_the_full_score_range() {
    for questionnaire in all_questionnaires() {
        let Some(interpretation) = &questionnaire.interpretation else {
            continue;
        };
        let max = questionnaire.max_score();
        assert!(max > 0.0, "{}: empty score range", questionnaire.id);

        for score in 0..=(max as i64) {
            let label = interpretation.label_for(score as f64);
            assert_ne!(
                label, UNEVALUATED_LABEL,
                "{}: score {} has no band",
                questionnaire.id, score
            );
        }
    }
}

#[test]
fn available_responses_reflect_the_default_shape() {
    // Option-list instruments surface their labels.
    let gad7 = get_questionnaire("gad-7").unwrap();
    let responses = gad7.available_responses().unwrap();
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0], "Not at all");

    // Scale instruments surface split+1 tick labels.
    let des = get_questionnaire("des-ii").unwrap();
    let ticks = des.available_responses().unwrap();
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], "0");
    assert_eq!(ticks[10], "100");

    // Instruments with neither surface nothing.
    let bdi = get_questionnaire("bdi-ii").unwrap();
    assert!(bdi.available_responses().is_none());
}
