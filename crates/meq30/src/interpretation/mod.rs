//! Turns scores into a localized paragraph assembled from a versioned text repository.

mod bands;
mod engine;
mod repository;

pub use bands::Band;
pub use engine::Interpreter;
pub use repository::{LocaleText, TextRepository, TextRepositoryError, VerdictText};

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::questionnaire::Subscale;
use crate::scoring::ScoreResult;

/// One factor's position in the ranked factor analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorReading {
    pub subscale: Subscale,
    pub fraction: f64,
    pub band: Band,
    pub meets_threshold: bool,
}

/// Paragraph stamped with the repository identity that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub key: String,
    pub version: String,
    pub locale: String,
    pub paragraph: String,
    /// Factors ranked strongest first.
    pub factors: Vec<FactorReading>,
}

impl Interpretation {
    pub fn strongest(&self) -> Option<&FactorReading> {
        self.factors.first()
    }

    pub fn weakest(&self) -> Option<&FactorReading> {
        self.factors.last()
    }
}

/// Interprets with the built-in repository.
pub fn interpret(scores: &ScoreResult, locale: &str) -> Interpretation {
    static BUILTIN: OnceLock<Interpreter> = OnceLock::new();
    BUILTIN
        .get_or_init(|| {
            let repository = TextRepository::builtin().unwrap_or_else(|err| {
                warn!(error = %err, "built-in text repository unusable; using generated text");
                TextRepository::empty()
            });
            Interpreter::new(Arc::new(repository))
        })
        .interpret(scores, locale)
}
