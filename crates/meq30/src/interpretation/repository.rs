use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::bands::Band;
use crate::questionnaire::Subscale;

const BUILTIN_REPOSITORY: &str = include_str!("meq30_repo.v1.json");

/// Versioned, locale-keyed sentence tables used to assemble interpretations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRepository {
    pub repo_id: String,
    pub version: String,
    pub default_locale: String,
    #[serde(default)]
    pub text: BTreeMap<String, LocaleText>,
}

/// Sentence tables for one locale. Every table may be sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleText {
    #[serde(default)]
    pub verdict: VerdictText,
    #[serde(default)]
    pub factor_meanings: BTreeMap<Subscale, BTreeMap<Band, Vec<String>>>,
    #[serde(default)]
    pub meets_threshold: BTreeMap<Subscale, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictText {
    #[serde(default)]
    pub complete: Vec<String>,
    #[serde(default)]
    pub not_complete: Vec<String>,
}

fn first_sentence(sentences: &[String]) -> Option<&str> {
    sentences
        .iter()
        .map(|sentence| sentence.trim())
        .find(|sentence| !sentence.is_empty())
}

impl LocaleText {
    pub fn verdict(&self, complete_mystical: bool) -> Option<&str> {
        if complete_mystical {
            first_sentence(&self.verdict.complete)
        } else {
            first_sentence(&self.verdict.not_complete)
        }
    }

    pub fn factor_meaning(&self, subscale: Subscale, band: Band) -> Option<&str> {
        self.factor_meanings
            .get(&subscale)
            .and_then(|bands| bands.get(&band))
            .and_then(|sentences| first_sentence(sentences))
    }

    pub fn meets_threshold(&self, subscale: Subscale) -> Option<&str> {
        self.meets_threshold
            .get(&subscale)
            .and_then(|sentences| first_sentence(sentences))
    }
}

impl TextRepository {
    /// The repository shipped with the crate.
    pub fn builtin() -> Result<Self, TextRepositoryError> {
        Self::from_json_str(BUILTIN_REPOSITORY)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TextRepositoryError> {
        let repository: TextRepository = serde_json::from_str(raw)?;
        repository.validate()?;
        Ok(repository)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextRepositoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TextRepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Repository with no sentences; every lookup falls through to generated text.
    pub fn empty() -> Self {
        Self {
            repo_id: "meq30_repo".to_string(),
            version: "0.0.0".to_string(),
            default_locale: "en".to_string(),
            text: BTreeMap::new(),
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.text.keys().map(String::as_str)
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.text.contains_key(locale)
    }

    pub fn locale_text(&self, locale: &str) -> Option<&LocaleText> {
        self.text.get(locale)
    }

    pub fn set_default_locale(&mut self, locale: &str) -> Result<(), TextRepositoryError> {
        if !self.supports(locale) {
            return Err(TextRepositoryError::UnknownLocale(locale.to_string()));
        }
        self.default_locale = locale.to_string();
        Ok(())
    }

    /// The default locale must be able to render any score on its own.
    pub fn validate(&self) -> Result<(), TextRepositoryError> {
        let locale = self.default_locale.as_str();
        let text = self
            .locale_text(locale)
            .ok_or_else(|| TextRepositoryError::UnknownLocale(locale.to_string()))?;

        let incomplete = |entry: String| TextRepositoryError::Incomplete {
            locale: locale.to_string(),
            entry,
        };

        if text.verdict(true).is_none() {
            return Err(incomplete("verdict.complete".to_string()));
        }
        if text.verdict(false).is_none() {
            return Err(incomplete("verdict.notComplete".to_string()));
        }
        for subscale in Subscale::ALL {
            for band in Band::ALL {
                if text.factor_meaning(subscale, band).is_none() {
                    return Err(incomplete(format!(
                        "factorMeanings.{}.{:?}",
                        subscale.key(),
                        band
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TextRepositoryError {
    #[error("failed to read text repository {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("text repository is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("text repository has no locale '{0}'")]
    UnknownLocale(String),
    #[error("text repository locale '{locale}' is missing {entry}")]
    Incomplete { locale: String, entry: String },
}
