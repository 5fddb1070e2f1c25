use std::sync::LazyLock;

use sona_core::models::{
    Interpretation, Question, QuestionKind, Questionnaire, ScaleDefaults, ScaleRange,
    ScoreTransform,
};

use super::band;

const STEM: &str = "Answer this question based on how often do you experience this in your \
                    daily life when you are not under the influence of drugs or alcohol? Choose \
                    the answer that shows what percentage of the time you have the experience:";

/// DES-II: Dissociative Experiences Scale, Second Edition.
/// 28 items, each a 0–100% slider in steps of 10. The reported score is the
/// item mean, so the interpretation bands sit on the 0–100 domain.
pub fn questionnaire() -> &'static Questionnaire {
    static DES_II: LazyLock<Questionnaire> = LazyLock::new(|| {
        let items = [
            "Some people find that sometimes they are listening to someone talk and they \
             suddenly realize that they did not hear part or all of what was said.",
            "Some people have the experience of finding themselves in a place and have no idea \
             how they got there.",
            "Some people have the experience of being in a car and suddenly realizing that \
             they don't remember what has happened during all or part of the trip.",
            "Some people have the experience of finding themselves dressed in clothes that \
             they don\u{2019}t remember putting on.",
            "Some people have the experience of finding new things among their belongings that \
             they do not remember buying.",
            "Some people sometimes find that they are approached by people that they do not \
             know, who call them by another name or insist that they have met them before.",
            "Some people sometimes have the experience of feeling as though they are standing \
             next to themselves or watching themselves do something and they actually see \
             themselves as if they were looking at another person.",
            "Some people are told that they sometimes do not recognize friends or family \
             members.",
            "Some people find that they have no memory for some important events in their \
             lives (for example, a wedding or graduation).",
            "Some people have the experience of being accused of lying when they do not think \
             that they have lied.",
            "Some people have the experience of looking in a mirror and not recognizing \
             themselves.",
            "Some people have the experience of feeling that other people, objects, and the \
             world around them are not real.",
            "Some people have the experience of feeling that their body does not seem to \
             belong to them.",
            "Some people have the experience of sometimes remembering a past event so vividly \
             that they feel as if they were reliving that event.",
            "Some people have the experience of not being sure whether things that they \
             remember happening really did happen or whether they just dreamed them.",
            "Some people have the experience of being in a familiar place but finding it \
             strange and unfamiliar.",
            "Some people find that when they are watching television or a movie they become so \
             absorbed in the story that they are unaware of other events happening around \
             them.",
            "Some people find that they become so involved in a fantasy or daydream that it \
             feels as though it were really happening to them.",
            "Some people find that they sometimes are able to ignore pain.",
            "Some people find that they sometimes sit staring off into space, thinking of \
             nothing, and are not aware of the passage of time.",
            "Some people sometimes find that when they are alone they talk out loud to \
             themselves.",
            "Some people find that in one situation they may act so differently compared with \
             another situation that they feel almost as if they were two different people.",
            "Some people sometimes find that in certain situations they are able to do things \
             with amazing ease and spontaneity that would usually be difficult for them (for \
             example, sports, work, social situations, etc.).",
            "Some people sometimes find that they cannot remember whether they have done \
             something or have just thought about doing that thing (for example, not knowing \
             whether they have just mailed a letter or have just thought about mailing it).",
            "Some people find evidence that they have done things that they do not remember \
             doing.",
            "Some people sometimes find writings, drawings, or notes among their belongings \
             that they must have done but cannot remember doing.",
            "Some people sometimes find that they hear voices inside their head that tell them \
             to do things or comment on things that they are doing.",
            "Some people sometimes feel as if they are looking at the world through a fog, so \
             that people and objects appear far away or unclear.",
        ];

        Questionnaire {
            id: "des-ii".to_string(),
            name: "Dissociative Experiences Scale - II".to_string(),
            summary: "28 symptom self-report to assess disassociation".to_string(),
            options: None,
            scale: Some(ScaleDefaults {
                min: 0.0,
                max: 100.0,
                split: 10,
            }),
            questions: items
                .iter()
                .enumerate()
                .map(|(i, item)| Question {
                    id: format!("q{}", i + 1),
                    text: format!("{STEM} {item}"),
                    kind: QuestionKind::Slider {
                        scale: Some(ScaleRange {
                            min: 0.0,
                            max: 100.0,
                        }),
                        breakpoints: 10,
                    },
                })
                .collect(),
            explanation: "The reported score is the mean percentage across all 28 items; means \
                          of 30 or above warrant further clinical evaluation."
                .to_string(),
            interpretation: Some(Interpretation {
                // The elevated band is listed first so a mean of exactly 30
                // resolves to it under the first-match rule.
                bands: vec![
                    band(
                        30.0,
                        100.0,
                        "High level of dissociative experiences - further clinical evaluation \
                         is recommended",
                    ),
                    band(0.0, 30.0, "Within the typical range of dissociative experiences"),
                ],
                transform: Some(ScoreTransform::DivideBy {
                    divisor: 28.0,
                    decimals: 2,
                }),
            }),
        }
    });
    &DES_II
}
