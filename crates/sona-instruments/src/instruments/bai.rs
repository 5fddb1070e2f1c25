use std::sync::LazyLock;

use sona_core::models::{Interpretation, Questionnaire};

use super::{band, choice_questions};

const STEM: &str = "During the past month, how much have you been bothered by:";

/// BAI: Beck Anxiety Inventory.
/// 21 somatic/cognitive symptom items rated 0–3. Total 0–63.
pub fn questionnaire() -> &'static Questionnaire {
    static BAI: LazyLock<Questionnaire> = LazyLock::new(|| {
        let items = [
            "Numbness or tingling",
            "Feeling hot",
            "Wobbliness in legs",
            "Unable to relax",
            "Fear of worst happening",
            "Dizzy or lightheaded",
            "Heart pounding/racing",
            "Unsteady",
            "Terrified or afraid",
            "Nervous",
            "Feeling of choking",
            "Hands trembling",
            "Shaky/unsteady",
            "Fear of losing control",
            "Difficulty in breathing",
            "Fear of dying",
            "Scared",
            "Indigestion",
            "Faint/lightheaded",
            "Face flushed",
            "Hot/cold sweats",
        ];

        Questionnaire {
            id: "bai".to_string(),
            name: "Beck Anxiety Inventory".to_string(),
            summary: "21-item self-report scale assessing severity of anxiety".to_string(),
            options: Some(vec![
                "Not at all".to_string(),
                "Mildly".to_string(),
                "Moderately".to_string(),
                "Severely".to_string(),
            ]),
            scale: None,
            questions: choice_questions(STEM, &items),
            explanation: "Each symptom is rated 0-3 by how much it bothered you over the past \
                          month; totals above 21 indicate moderate anxiety, above 35 potentially \
                          concerning anxiety."
                .to_string(),
            interpretation: Some(Interpretation {
                bands: vec![
                    band(0.0, 21.0, "Low anxiety"),
                    band(22.0, 35.0, "Moderate anxiety"),
                    band(36.0, 63.0, "Potentially concerning levels of anxiety"),
                ],
                transform: None,
            }),
        }
    });
    &BAI
}
