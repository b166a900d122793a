use std::collections::BTreeMap;

use serde_json::Value;

use super::{ValidationError, ValidationErrorKind};
use crate::questionnaire::{AnswerSet, ResponseScale, Subscale};

/// Responses that passed validation, keyed by canonical id.
pub(crate) struct ValidatedAnswers {
    values: BTreeMap<u16, u8>,
}

impl ValidatedAnswers {
    pub(crate) fn sum_of(&self, subscale: Subscale) -> u32 {
        subscale
            .canonical_ids()
            .iter()
            .filter_map(|id| self.values.get(id))
            .map(|value| u32::from(*value))
            .sum()
    }

    pub(crate) fn total(&self) -> u32 {
        self.values.values().map(|value| u32::from(*value)).sum()
    }
}

/// Checks every catalog item in subscale order and stops at the first defect.
pub(crate) fn validate(answers: &AnswerSet) -> Result<ValidatedAnswers, ValidationError> {
    let mut values = BTreeMap::new();
    for subscale in Subscale::ALL {
        for &item_id in subscale.canonical_ids() {
            let value = response_value(item_id, answers.get(item_id))?;
            values.insert(item_id, value);
        }
    }
    Ok(ValidatedAnswers { values })
}

fn response_value(item_id: u16, raw: Option<&Value>) -> Result<u8, ValidationError> {
    let reject = |kind| ValidationError { item_id, kind };

    let number = match raw {
        None | Some(Value::Null) => return Err(reject(ValidationErrorKind::Missing)),
        Some(Value::Number(number)) => number,
        Some(_) => return Err(reject(ValidationErrorKind::NotInteger)),
    };

    let integer = if let Some(value) = number.as_i64() {
        value
    } else if number.as_u64().is_some() {
        return Err(reject(ValidationErrorKind::Overflow));
    } else {
        match number.as_f64() {
            Some(value) if value.is_finite() && value.fract() == 0.0 => {
                // 2^63 is the first whole f64 past i64::MAX.
                if value < i64::MIN as f64 || value >= i64::MAX as f64 {
                    return Err(reject(ValidationErrorKind::Overflow));
                }
                value as i64
            }
            _ => return Err(reject(ValidationErrorKind::NotInteger)),
        }
    };

    if !ResponseScale::contains(integer) {
        return Err(reject(ValidationErrorKind::OutOfRange(integer)));
    }

    u8::try_from(integer).map_err(|_| reject(ValidationErrorKind::OutOfRange(integer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_whole_floats() {
        assert_eq!(response_value(35, Some(&json!(3.0))).expect("whole float"), 3);
        assert_eq!(response_value(35, Some(&json!(0))).expect("zero"), 0);
    }

    #[test]
    fn classifies_defects() {
        let cases = [
            (None, ValidationErrorKind::Missing),
            (Some(json!(null)), ValidationErrorKind::Missing),
            (Some(json!(2.5)), ValidationErrorKind::NotInteger),
            (Some(json!("3")), ValidationErrorKind::NotInteger),
            (Some(json!(6)), ValidationErrorKind::OutOfRange(6)),
            (Some(json!(-1)), ValidationErrorKind::OutOfRange(-1)),
        ];

        for (raw, expected) in cases {
            let err = response_value(12, raw.as_ref()).expect_err("value rejected");
            assert_eq!(err.item_id, 12);
            assert_eq!(err.kind, expected, "raw {raw:?}");
        }
    }

    #[test]
    fn reports_overflow_instead_of_a_clamped_value() {
        for raw in [json!(u64::MAX), json!(1e20), json!(-1e20)] {
            let err = response_value(12, Some(&raw)).expect_err("value rejected");
            assert_eq!(err.kind, ValidationErrorKind::Overflow, "raw {raw}");
            assert!(!err.to_string().contains(&i64::MAX.to_string()));
        }

        let err = response_value(12, Some(&json!(i64::MAX))).expect_err("value rejected");
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange(i64::MAX));
    }
}
