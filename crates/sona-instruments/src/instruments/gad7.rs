use std::sync::LazyLock;

use sona_core::models::{Interpretation, Questionnaire};

use super::{band, choice_questions};

const STEM: &str = "Over the last two weeks, how often have you been bothered by";

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// 7 items rated 0–3 on a shared frequency list. Total 0–21.
pub fn questionnaire() -> &'static Questionnaire {
    static GAD7: LazyLock<Questionnaire> = LazyLock::new(|| {
        let items = [
            "feeling nervous, anxious, or on edge?",
            "not being able to stop or control worrying?",
            "worrying too much about different things?",
            "trouble relaxing?",
            "being so restless that it is hard to sit still?",
            "becoming easily annoyed or irritable?",
            "feeling afraid, as if something awful might happen?",
        ];

        Questionnaire {
            id: "gad-7".to_string(),
            name: "Generalized Anxiety Disorder - 7".to_string(),
            summary: "The GAD-7 is a 7-item self-report questionnaire designed to screen for \
                      Generalized Anxiety Disorder and to measure anxiety symptom severity over \
                      the past 2 weeks."
                .to_string(),
            options: Some(vec![
                "Not at all".to_string(),
                "Several days".to_string(),
                "More than half the days".to_string(),
                "Nearly every day".to_string(),
            ]),
            scale: None,
            questions: choice_questions(STEM, &items),
            explanation: "Each item is scored 0-3 by symptom frequency; totals of 5, 10, and 15 \
                          mark the mild, moderate, and severe thresholds."
                .to_string(),
            interpretation: Some(Interpretation {
                bands: vec![
                    band(0.0, 4.0, "Minimal anxiety"),
                    band(5.0, 9.0, "Mild anxiety"),
                    band(10.0, 14.0, "Moderate anxiety"),
                    band(15.0, 21.0, "Severe anxiety"),
                ],
                transform: None,
            }),
        }
    });
    &GAD7
}
