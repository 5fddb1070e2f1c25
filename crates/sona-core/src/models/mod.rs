pub mod interpretation;
pub mod question;
pub mod questionnaire;
pub mod response_shape;

pub use interpretation::{Band, Interpretation, ScoreTransform, UNEVALUATED_LABEL};
pub use question::{Question, QuestionKind, ScaleRange};
pub use questionnaire::{Questionnaire, ScaleDefaults};
pub use response_shape::ResponseShape;
