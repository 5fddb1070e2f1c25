use std::sync::LazyLock;

use sona_core::models::{Interpretation, Questionnaire};

use super::{band, choice_questions};

/// SPIN: Social Phobia Inventory.
/// 17 items rated 0–4 on a shared intensity list. Total 0–68.
pub fn questionnaire() -> &'static Questionnaire {
    static SPIN: LazyLock<Questionnaire> = LazyLock::new(|| {
        let items = [
            "I am afraid of people in authority",
            "I am bothered by blushing in front of people",
            "Parties and social events scare me",
            "I avoid talking to people I don\u{2019}t know",
            "Being criticized scares me a lot",
            "I avoid doing things or speaking to people for fear of embarrassment",
            "Sweating in front of people causes me distress",
            "I avoid going to parties",
            "I avoid activities in which I am the center of attention",
            "Talking to strangers scares me",
            "I avoid having to give speeches",
            "I would do anything to avoid being criticized",
            "Heart palpitations bother me when I am around people",
            "I am afraid of doing things when people might be watching",
            "Being embarrassed or looking stupid are among my worst fears",
            "I avoid speaking to anyone in authority",
            "Trembling or shaking in front of others is distressing to me",
        ];

        Questionnaire {
            id: "spin".to_string(),
            name: "Social Phobia Inventory".to_string(),
            summary: "17-item self-report measure assessing social anxiety symptoms".to_string(),
            options: Some(vec![
                "Not at all".to_string(),
                "A Little".to_string(),
                "Somewhat".to_string(),
                "Very".to_string(),
                "Extremely".to_string(),
            ]),
            scale: None,
            questions: choice_questions("", &items),
            explanation: "Each item is rated 0-4 by how much the problem bothered you during the \
                          past week; 21 and above suggests clinically significant social anxiety."
                .to_string(),
            interpretation: Some(Interpretation {
                bands: vec![
                    band(0.0, 20.0, "Minimal or no social anxiety"),
                    band(21.0, 30.0, "Mild social anxiety"),
                    band(31.0, 40.0, "Moderate social anxiety"),
                    band(41.0, 50.0, "Severe social anxiety"),
                    band(51.0, 68.0, "Very severe social anxiety"),
                ],
                transform: None,
            }),
        }
    });
    &SPIN
}
