use std::sync::LazyLock;

use sona_core::models::Questionnaire;

use crate::instruments;

/// A display grouping of instruments. The session engine never consults
/// this; it exists for catalog navigation.
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub questionnaires: Vec<&'static Questionnaire>,
}

/// The catalog, grouped by disorder category.
pub fn categories() -> &'static [Category] {
    static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
        vec![
            Category {
                id: "anxiety",
                name: "Anxiety Disorders",
                questionnaires: vec![
                    instruments::gad7::questionnaire(),
                    instruments::spin::questionnaire(),
                    instruments::bai::questionnaire(),
                ],
            },
            Category {
                id: "depressive",
                name: "Depressive Disorders",
                questionnaires: vec![
                    instruments::phq9::questionnaire(),
                    instruments::bdi_ii::questionnaire(),
                ],
            },
            Category {
                id: "dissociation",
                name: "Dissociation",
                questionnaires: vec![instruments::des_ii::questionnaire()],
            },
        ]
    });
    &CATEGORIES
}
