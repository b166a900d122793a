//! Scoring and interpretation engine for the 30-item Mystical Experience Questionnaire.
//!
//! [`scoring::score`] turns a raw answer map into four subscale scores and the
//! complete-mystical classification; [`interpretation::Interpreter`] turns those scores
//! into a localized paragraph drawn from a versioned text repository. Both are pure and
//! safe to call concurrently. The [`submission`] module wraps them in the journal
//! request flow used by the HTTP service.

pub mod config;
pub mod error;
pub mod interpretation;
pub mod questionnaire;
pub mod scoring;
pub mod submission;
pub mod telemetry;

pub use interpretation::{interpret, Interpretation, Interpreter, TextRepository};
pub use questionnaire::{AnswerSet, Subscale};
pub use scoring::{score, ScoreEncoding, ScoreResult, ValidationError};
