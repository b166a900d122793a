use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::items::items;

/// Raw response as submitted, kept untyped so validation can name the offending item.
pub type AnswerValue = Value;

/// Responses keyed by canonical item id rendered as a string (`"35"`, `"2"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog item answered with the same value.
    pub fn uniform(value: u8) -> Self {
        items()
            .iter()
            .map(|item| (item.canonical_id, value))
            .collect()
    }

    pub fn insert(&mut self, canonical_id: u16, value: u8) -> &mut Self {
        self.answers
            .insert(canonical_id.to_string(), Value::Number(Number::from(value)));
        self
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, value: AnswerValue) -> &mut Self {
        self.answers.insert(key.into(), value);
        self
    }

    pub fn remove(&mut self, canonical_id: u16) -> Option<AnswerValue> {
        self.answers.remove(&canonical_id.to_string())
    }

    pub fn get(&self, canonical_id: u16) -> Option<&AnswerValue> {
        self.answers.get(&canonical_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(u16, u8)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u16, u8)>>(iter: T) -> Self {
        let mut set = AnswerSet::new();
        for (canonical_id, value) in iter {
            set.insert(canonical_id, value);
        }
        set
    }
}

impl From<BTreeMap<String, AnswerValue>> for AnswerSet {
    fn from(answers: BTreeMap<String, AnswerValue>) -> Self {
        Self { answers }
    }
}
