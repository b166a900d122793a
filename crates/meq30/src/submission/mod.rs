//! Journal submission flow around the scorer and interpreter: request validation,
//! persistence through an [`ExperienceStore`], and the HTTP router.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    ExperienceId, ExperienceRecord, ExperienceView, QuestionView, QuestionnaireView,
    ScaleAnchorView, StoredInterpretation, SubmitRequest,
};
pub use router::meq30_router;
pub use service::{Evaluation, SubmissionError, SubmissionService};
pub use store::{ExperienceStore, StoreError};
