use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use super::domain::{
    ExperienceId, ExperienceRecord, ExperienceView, QuestionnaireView, StoredInterpretation,
    SubmitRequest,
};
use super::store::{ExperienceStore, StoreError};
use crate::interpretation::{Interpretation, Interpreter};
use crate::questionnaire::AnswerSet;
use crate::scoring::{score, ScoreResult, ValidationError};

/// Scores and interpretation computed together for one answer set.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Evaluation {
    pub scores: ScoreResult,
    pub interpretation: Interpretation,
}

/// Service composing the scorer, interpreter, and experience store.
pub struct SubmissionService<S> {
    store: Arc<S>,
    interpreter: Interpreter,
}

static EXPERIENCE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_experience_id() -> ExperienceId {
    let id = EXPERIENCE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ExperienceId(format!("exp-{id:06}"))
}

impl<S> SubmissionService<S>
where
    S: ExperienceStore + 'static,
{
    pub fn new(store: Arc<S>, interpreter: Interpreter) -> Self {
        Self { store, interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn questionnaire(&self, locale: Option<&str>) -> QuestionnaireView {
        let locale = self.resolve_locale(locale);
        QuestionnaireView::for_locale(&locale)
    }

    /// Score and interpret without persisting anything.
    pub fn evaluate(
        &self,
        answers: &AnswerSet,
        locale: Option<&str>,
    ) -> Result<Evaluation, ValidationError> {
        let scores = score(answers)?;
        let locale = self.resolve_locale(locale);
        let interpretation = self.interpreter.interpret(&scores, &locale);
        Ok(Evaluation {
            scores,
            interpretation,
        })
    }

    /// Validate, score, interpret, and upsert an experience.
    pub fn submit(&self, request: SubmitRequest) -> Result<ExperienceRecord, SubmissionError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(SubmissionError::MissingTitle);
        }

        let language = request.language.trim();
        if !self.interpreter.repository().supports(language) {
            return Err(SubmissionError::UnsupportedLanguage(language.to_string()));
        }

        let occurred_at = parse_occurred_at(request.date.as_deref())?;
        let scores = score(&request.answers)?;
        let interpretation = self.interpreter.interpret(&scores, language);

        let existing_id = request
            .experience_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ExperienceId(id.to_string()));

        let record = ExperienceRecord {
            id: existing_id.clone().unwrap_or_else(next_experience_id),
            title: title.to_string(),
            occurred_at,
            notes: request
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            language: language.to_string(),
            answers: request.answers,
            scores: scores.to_record(),
            interpretation: StoredInterpretation::snapshot(&interpretation, language),
            submitted_at: Utc::now(),
        };

        let stored = match existing_id {
            Some(_) => {
                self.store.update(record.clone())?;
                record
            }
            None => self.store.insert(record)?,
        };

        info!(
            experience_id = %stored.id.0,
            language = %stored.language,
            complete_mystical = stored.scores.complete_mystical,
            "experience saved"
        );

        Ok(stored)
    }

    pub fn get(&self, id: &ExperienceId) -> Result<ExperienceRecord, SubmissionError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    /// Stored experience with its interpretation regenerated from the stored scores.
    pub fn view(
        &self,
        id: &ExperienceId,
        locale: Option<&str>,
    ) -> Result<ExperienceView, SubmissionError> {
        let record = self.get(id)?;
        let locale = locale
            .map(str::to_string)
            .unwrap_or_else(|| record.language.clone());
        let scores = ScoreResult::from_record(&record.scores);
        let interpretation = self.interpreter.interpret(&scores, &locale);

        Ok(ExperienceView {
            experience_id: record.id,
            title: record.title,
            occurred_at: record.occurred_at,
            notes: record.notes,
            scores: record.scores,
            interpretation,
        })
    }

    fn resolve_locale(&self, locale: Option<&str>) -> String {
        locale
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .unwrap_or(self.interpreter.repository().default_locale.as_str())
            .to_string()
    }
}

fn parse_occurred_at(raw: Option<&str>) -> Result<Option<NaiveDate>, SubmissionError> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc).date_naive()))
        .map_err(|_| SubmissionError::InvalidDate(raw.to_string()))
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("title is required")]
    MissingTitle,
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),
    #[error("failed to parse '{0}' as YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Whether the caller can fix the request and resubmit.
    pub fn is_input_defect(&self) -> bool {
        matches!(
            self,
            SubmissionError::MissingTitle
                | SubmissionError::UnsupportedLanguage(_)
                | SubmissionError::InvalidDate(_)
                | SubmissionError::Validation(_)
        )
    }
}
