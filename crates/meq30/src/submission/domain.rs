use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::interpretation::Interpretation;
use crate::questionnaire::{items, AnswerSet, ResponseScale, Subscale};
use crate::scoring::ScoreRecord;

/// Identifier wrapper for stored experiences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceId(pub String);

/// Journal entry submitted together with its questionnaire answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub experience_id: Option<String>,
    pub title: String,
    /// `YYYY-MM-DD` or RFC 3339; blank means unknown.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub answers: AnswerSet,
    pub language: String,
}

/// Paragraph snapshot taken at save time. Scores stay the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredInterpretation {
    pub key: String,
    pub version: String,
    /// Paragraph per locale; a submission keeps only the submitted language.
    pub paragraphs: BTreeMap<String, String>,
}

impl StoredInterpretation {
    pub(crate) fn snapshot(interpretation: &Interpretation, language: &str) -> Self {
        let mut paragraphs = BTreeMap::new();
        paragraphs.insert(language.to_string(), interpretation.paragraph.clone());
        Self {
            key: interpretation.key.clone(),
            version: interpretation.version.clone(),
            paragraphs,
        }
    }
}

/// Persisted experience with its response and score columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: ExperienceId,
    pub title: String,
    pub occurred_at: Option<NaiveDate>,
    pub notes: Option<String>,
    pub language: String,
    pub answers: AnswerSet,
    pub scores: ScoreRecord,
    pub interpretation: StoredInterpretation,
    pub submitted_at: DateTime<Utc>,
}

/// Stored experience paired with an interpretation regenerated from its scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub experience_id: ExperienceId,
    pub title: String,
    pub occurred_at: Option<NaiveDate>,
    pub notes: Option<String>,
    pub scores: ScoreRecord,
    pub interpretation: Interpretation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub canonical_id: u16,
    pub order: u8,
    pub subscale: Subscale,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleAnchorView {
    pub value: u8,
    pub label: &'static str,
}

/// Questionnaire rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireView {
    pub locale: String,
    pub items: Vec<QuestionView>,
    pub scale: Vec<ScaleAnchorView>,
}

impl QuestionnaireView {
    pub fn for_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            items: items()
                .iter()
                .map(|item| QuestionView {
                    canonical_id: item.canonical_id,
                    order: item.order,
                    subscale: item.subscale,
                    text: item.text(locale),
                })
                .collect(),
            scale: ResponseScale::anchors()
                .iter()
                .map(|anchor| ScaleAnchorView {
                    value: anchor.value,
                    label: anchor.label(locale),
                })
                .collect(),
        }
    }
}
