//! sona-instruments
//!
//! The screening instrument catalog. Pure data — questionnaire definitions,
//! question text, and interpretation threshold tables, built once at first
//! access and immutable thereafter.

pub mod catalog;
pub mod instruments;

use sona_core::models::Questionnaire;

pub use catalog::{Category, categories};

/// Every questionnaire in the catalog, in category order.
pub fn all_questionnaires() -> Vec<&'static Questionnaire> {
    categories()
        .iter()
        .flat_map(|category| category.questionnaires.iter().copied())
        .collect()
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<&'static Questionnaire> {
    all_questionnaires().into_iter().find(|q| q.id == id)
}
