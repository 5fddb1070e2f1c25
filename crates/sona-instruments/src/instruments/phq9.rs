use std::sync::LazyLock;

use sona_core::models::{Interpretation, Questionnaire};

use super::{band, choice_questions};

const STEM: &str = "Over the last two weeks, how often have you been bothered by:";

/// PHQ-9: Patient Health Questionnaire depression module.
/// 9 items rated 0–3 on a shared frequency list. Total 0–27.
pub fn questionnaire() -> &'static Questionnaire {
    static PHQ9: LazyLock<Questionnaire> = LazyLock::new(|| {
        let items = [
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself - or that you are a failure or have let yourself or \
             your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching \
             television",
            "Moving or speaking so slowly that other people could have noticed. Or the \
             opposite - being so fidgety or restless that you have been moving around a lot \
             more than usual",
            "Thoughts that you would be better off dead, or of hurting yourself in some way",
        ];

        Questionnaire {
            id: "phq-9".to_string(),
            name: "Patient Health Questionaire".to_string(),
            summary: "9-item self-report for depression over the past 2 weeks".to_string(),
            options: Some(vec![
                "Not at all".to_string(),
                "Several Days".to_string(),
                "More than half the days".to_string(),
                "Nearly every day".to_string(),
            ]),
            scale: None,
            questions: choice_questions(STEM, &items),
            explanation: "Each item is scored 0-3 by symptom frequency; totals of 5, 10, 15, and \
                          20 mark the mild, moderate, moderately severe, and severe thresholds."
                .to_string(),
            interpretation: Some(Interpretation {
                bands: vec![
                    band(0.0, 4.0, "Minimal depression"),
                    band(5.0, 9.0, "Mild depression"),
                    band(10.0, 14.0, "Moderate depression"),
                    band(15.0, 19.0, "Moderately severe depression"),
                    band(20.0, 27.0, "Severe depression"),
                ],
                transform: None,
            }),
        }
    });
    &PHQ9
}
