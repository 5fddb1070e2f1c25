//! sona-session
//!
//! The assessment session engine: an ordered queue of questionnaires, the
//! answers captured for each, score computation, and interpretation. State
//! is caller-owned — construct an [`AssessmentSession`], hand it to the
//! presentation layer, and persist scores through any
//! [`sona_storage::KeyValueStore`].
//!
//! The engine degrades silently rather than erroring: missing state
//! resolves to defaults or no-ops, matching its role behind an interactive
//! UI with no error channel of its own. Only persistence I/O is fallible.

pub mod error;
pub mod scoring;
pub mod session;

pub use error::SessionError;
pub use scoring::{NO_ANSWER, TREAT_ZERO_AS_UNANSWERED};
pub use session::{AssessmentSession, ResponseRecord, SCORES_KEY};
