//! Deterministic MEQ-30 scorer: validated answers to subscale scores and the
//! complete-mystical classification.

mod rules;
mod validation;

pub use validation::{ValidationError, ValidationErrorKind};

use crate::questionnaire::{AnswerSet, Subscale, ITEM_COUNT, MAX_RESPONSE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every subscale must reach this share of its maximum for a complete mystical experience.
pub const COMPLETE_THRESHOLD_PERCENT: f64 = 60.0;
/// Mean-scale equivalent of [`COMPLETE_THRESHOLD_PERCENT`].
pub const COMPLETE_THRESHOLD_MEAN: f64 = 3.0;

/// The two historical encodings of a subscale value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreEncoding {
    /// 0-100, share of the maximum achievable sum.
    Percentage,
    /// 0-5, average item response.
    Mean,
}

/// Score for one factor. `percentage == mean * 20` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscaleScore {
    pub subscale: Subscale,
    pub sum: u32,
    pub item_count: u8,
    pub percentage: f64,
    pub mean: f64,
}

impl SubscaleScore {
    fn from_sum(subscale: Subscale, sum: u32) -> Self {
        let item_count = subscale.item_count();
        let max_possible = (item_count * usize::from(MAX_RESPONSE)) as f64;
        Self {
            subscale,
            sum,
            item_count: item_count as u8,
            percentage: (f64::from(sum) / max_possible) * 100.0,
            mean: f64::from(sum) / item_count as f64,
        }
    }

    /// Rebuilds a score from a stored percentage; `sum` is the nearest whole sum.
    fn from_percentage(subscale: Subscale, percentage: f64) -> Self {
        let item_count = subscale.item_count();
        let percentage = if percentage.is_finite() {
            percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let max_possible = (item_count * usize::from(MAX_RESPONSE)) as f64;
        Self {
            subscale,
            sum: (percentage / 100.0 * max_possible).round() as u32,
            item_count: item_count as u8,
            percentage,
            mean: percentage / 20.0,
        }
    }

    pub fn value(&self, encoding: ScoreEncoding) -> f64 {
        match encoding {
            ScoreEncoding::Percentage => self.percentage,
            ScoreEncoding::Mean => self.mean,
        }
    }

    /// Share of the maximum in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        self.percentage / 100.0
    }

    pub fn meets_threshold(&self) -> bool {
        self.percentage >= COMPLETE_THRESHOLD_PERCENT
    }
}

/// Scores derived from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    mystical: SubscaleScore,
    positive_mood: SubscaleScore,
    time_space: SubscaleScore,
    ineffability: SubscaleScore,
    overall_mean: f64,
    complete_mystical: bool,
}

impl ScoreResult {
    fn from_subscales(subscales: [SubscaleScore; 4], overall_mean: f64) -> Self {
        let complete_mystical = subscales.iter().all(SubscaleScore::meets_threshold);
        let [mystical, positive_mood, time_space, ineffability] = subscales;
        Self {
            mystical,
            positive_mood,
            time_space,
            ineffability,
            overall_mean,
            complete_mystical,
        }
    }

    /// Rebuilds a result from persisted percentage columns. The overall mean is
    /// approximated from the subscale means weighted by item count.
    pub fn from_percentages(
        mystical: f64,
        positive_mood: f64,
        time_space: f64,
        ineffability: f64,
    ) -> Self {
        let subscales = [
            SubscaleScore::from_percentage(Subscale::Mystical, mystical),
            SubscaleScore::from_percentage(Subscale::PositiveMood, positive_mood),
            SubscaleScore::from_percentage(Subscale::TimeSpace, time_space),
            SubscaleScore::from_percentage(Subscale::Ineffability, ineffability),
        ];
        let weighted: f64 = subscales
            .iter()
            .map(|score| score.mean * f64::from(score.item_count))
            .sum();
        Self::from_subscales(subscales, weighted / ITEM_COUNT as f64)
    }

    pub fn from_record(record: &ScoreRecord) -> Self {
        Self::from_percentages(
            record.mystical_percentage,
            record.positive_mood_percentage,
            record.time_space_percentage,
            record.ineffability_percentage,
        )
    }

    pub fn get(&self, subscale: Subscale) -> &SubscaleScore {
        match subscale {
            Subscale::Mystical => &self.mystical,
            Subscale::PositiveMood => &self.positive_mood,
            Subscale::TimeSpace => &self.time_space,
            Subscale::Ineffability => &self.ineffability,
        }
    }

    /// Subscale scores in reporting order.
    pub fn subscales(&self) -> [&SubscaleScore; 4] {
        [
            &self.mystical,
            &self.positive_mood,
            &self.time_space,
            &self.ineffability,
        ]
    }

    pub fn value(&self, subscale: Subscale, encoding: ScoreEncoding) -> f64 {
        self.get(subscale).value(encoding)
    }

    /// Mean of all 30 responses, an overall intensity proxy.
    pub fn overall_mean(&self) -> f64 {
        self.overall_mean
    }

    pub fn complete_mystical(&self) -> bool {
        self.complete_mystical
    }

    pub fn to_record(&self) -> ScoreRecord {
        ScoreRecord {
            mystical_percentage: self.mystical.percentage,
            positive_mood_percentage: self.positive_mood.percentage,
            time_space_percentage: self.time_space.percentage,
            ineffability_percentage: self.ineffability.percentage,
            complete_mystical: self.complete_mystical,
        }
    }
}

/// Flat percentage view matching the persisted response columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub mystical_percentage: f64,
    pub positive_mood_percentage: f64,
    pub time_space_percentage: f64,
    pub ineffability_percentage: f64,
    pub complete_mystical: bool,
}

/// Scores a full answer set, failing on the first missing or out-of-domain item.
pub fn score(answers: &AnswerSet) -> Result<ScoreResult, ValidationError> {
    let validated = rules::validate(answers).map_err(|err| {
        debug!(item_id = err.item_id, reason = %err.kind, "rejected MEQ-30 answer set");
        err
    })?;

    let subscales = Subscale::ALL.map(|subscale| {
        SubscaleScore::from_sum(subscale, validated.sum_of(subscale))
    });
    let overall_mean = f64::from(validated.total()) / ITEM_COUNT as f64;

    Ok(ScoreResult::from_subscales(subscales, overall_mean))
}
