use std::sync::LazyLock;

use sona_core::models::Questionnaire;

/// BDI-II: Beck Depression Inventory, Second Edition.
/// The item text is licensed content and does not ship with the catalog;
/// the definition is listed so the UI can show the instrument, but it has
/// no questions and no interpretation.
pub fn questionnaire() -> &'static Questionnaire {
    static BDI_II: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
        id: "bdi-ii".to_string(),
        name: "Beck Depression Inventory - II".to_string(),
        summary: "21-item self-report measuring severity of depression".to_string(),
        options: None,
        scale: None,
        questions: vec![],
        explanation: String::new(),
        interpretation: None,
    });
    &BDI_II
}
