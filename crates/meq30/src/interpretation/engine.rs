use std::sync::Arc;

use tracing::debug;

use super::bands::Band;
use super::repository::{LocaleText, TextRepository};
use super::{FactorReading, Interpretation};
use crate::questionnaire::{Subscale, FALLBACK_LOCALE};
use crate::scoring::{ScoreResult, COMPLETE_THRESHOLD_PERCENT};

/// Stateless paragraph builder over a shared text repository.
#[derive(Debug, Clone)]
pub struct Interpreter {
    repository: Arc<TextRepository>,
}

impl Interpreter {
    pub fn new(repository: Arc<TextRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &TextRepository {
        &self.repository
    }

    /// Builds the paragraph for `scores` in `locale`. Factors at or above the threshold
    /// get their meets-threshold sentence; the rest get the sentence for their band.
    pub fn interpret(&self, scores: &ScoreResult, locale: &str) -> Interpretation {
        let repository = self.repository.as_ref();
        let resolved_locale = if repository.supports(locale) {
            locale
        } else {
            debug!(
                requested = locale,
                fallback = %repository.default_locale,
                "interpretation locale not in text repository"
            );
            repository.default_locale.as_str()
        };

        let complete = scores.complete_mystical();
        let (verdict_locale, verdict) = self
            .lookup(resolved_locale, |text| text.verdict(complete))
            .unwrap_or_else(|| (FALLBACK_LOCALE, generated::verdict(complete)));
        let verdict_locale = verdict_locale.to_string();
        let mut segments = Vec::with_capacity(Subscale::ALL.len() + 1);
        segments.push(verdict);

        let readings: Vec<FactorReading> = Subscale::ALL
            .iter()
            .map(|subscale| FactorReading::from_score(scores.get(*subscale)))
            .collect();

        for reading in &readings {
            let subscale = reading.subscale;
            let sentence = if reading.meets_threshold {
                self.lookup(resolved_locale, |text| text.meets_threshold(subscale))
                    .map(|(_, sentence)| sentence)
                    .unwrap_or_else(|| generated::meets_threshold(subscale))
            } else {
                self.lookup(resolved_locale, |text| {
                    text.factor_meaning(subscale, reading.band)
                })
                .map(|(_, sentence)| sentence)
                .unwrap_or_else(|| generated::band(subscale, reading.band))
            };
            segments.push(sentence);
        }

        let paragraph = segments
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Interpretation {
            key: repository.repo_id.clone(),
            version: repository.version.clone(),
            locale: verdict_locale,
            paragraph,
            factors: rank(readings),
        }
    }

    /// Requested locale first, then the repository default. Returns the locale the
    /// sentence came from alongside it.
    fn lookup<'a, F>(&'a self, locale: &'a str, select: F) -> Option<(&'a str, String)>
    where
        F: Fn(&'a LocaleText) -> Option<&'a str>,
    {
        let repository = self.repository.as_ref();
        let default_locale = repository.default_locale.as_str();
        [locale, default_locale].into_iter().find_map(|candidate| {
            repository
                .locale_text(candidate)
                .and_then(&select)
                .map(|sentence| (candidate, sentence.to_string()))
        })
    }
}

/// Strongest factor first; ties keep reporting order.
fn rank(mut readings: Vec<FactorReading>) -> Vec<FactorReading> {
    readings.sort_by(|a, b| b.fraction.total_cmp(&a.fraction));
    readings
}

impl FactorReading {
    fn from_score(score: &crate::scoring::SubscaleScore) -> Self {
        let fraction = score.fraction();
        Self {
            subscale: score.subscale,
            fraction,
            band: Band::classify(fraction),
            meets_threshold: score.meets_threshold(),
        }
    }
}

mod generated {
    use super::{Band, Subscale, COMPLETE_THRESHOLD_PERCENT};

    pub(super) fn verdict(complete: bool) -> String {
        if complete {
            "This experience meets the criteria for a complete mystical experience.".to_string()
        } else {
            "This experience does not meet the criteria for a complete mystical experience."
                .to_string()
        }
    }

    pub(super) fn meets_threshold(subscale: Subscale) -> String {
        format!(
            "{} met the {}% threshold.",
            subscale.label(),
            COMPLETE_THRESHOLD_PERCENT
        )
    }

    pub(super) fn band(subscale: Subscale, band: Band) -> String {
        format!("{} was {}.", subscale.label(), band.label())
    }
}
