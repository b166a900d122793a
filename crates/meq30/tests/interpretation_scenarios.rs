//! End-to-end scorer → interpreter scenarios against the built-in text repository.

use std::sync::Arc;

use meq30::interpretation::{interpret, Band, Interpreter, TextRepository};
use meq30::questionnaire::{items, AnswerSet, Subscale};
use meq30::scoring::score;

const EN_COMPLETE: &str = "Your responses meet the criteria for a complete mystical experience";
const EN_NOT_COMPLETE: &str =
    "Your responses do not meet the criteria for a complete mystical experience";

fn interpreter() -> Interpreter {
    Interpreter::new(Arc::new(
        TextRepository::builtin().expect("builtin repository parses"),
    ))
}

#[test]
fn all_moderate_answers_read_as_complete() {
    let scores = score(&AnswerSet::uniform(3)).expect("valid answers");
    let interpretation = interpreter().interpret(&scores, "en");

    assert!(interpretation.paragraph.starts_with(EN_COMPLETE));
    assert_eq!(interpretation.key, "meq30_repo");
    assert_eq!(interpretation.version, "1.0.0");
}

#[test]
fn all_zero_answers_use_the_not_complete_verdict() {
    let scores = score(&AnswerSet::uniform(0)).expect("valid answers");
    let interpretation = interpreter().interpret(&scores, "en");

    assert!(interpretation.paragraph.starts_with(EN_NOT_COMPLETE));
    assert!(interpretation
        .factors
        .iter()
        .all(|reading| reading.band == Band::Minimal && !reading.meets_threshold));
    assert!(interpretation
        .paragraph
        .contains("Your usual sense of time and place stayed essentially intact."));
}

#[test]
fn all_extreme_answers_resolve_to_meets_threshold_sentences() {
    let scores = score(&AnswerSet::uniform(5)).expect("valid answers");
    let interpretation = interpreter().interpret(&scores, "en");

    assert!(interpretation.paragraph.starts_with(EN_COMPLETE));
    for reading in &interpretation.factors {
        assert_eq!(reading.band, Band::VeryHigh);
        assert!(reading.meets_threshold);
    }
    assert_eq!(interpretation.paragraph.matches("met the threshold").count(), 3);
    assert!(interpretation
        .paragraph
        .contains("strong enough to meet the threshold"));
}

#[test]
fn mystical_only_answers_rank_another_factor_weakest() {
    let mut answers = AnswerSet::uniform(0);
    for id in Subscale::Mystical.canonical_ids() {
        answers.insert(*id, 5);
    }
    let scores = score(&answers).expect("valid answers");
    assert!(!scores.complete_mystical());

    let interpretation = interpreter().interpret(&scores, "en");
    assert!(interpretation.paragraph.starts_with(EN_NOT_COMPLETE));
    assert_eq!(
        interpretation.strongest().map(|reading| reading.subscale),
        Some(Subscale::Mystical)
    );
    let weakest = interpretation.weakest().expect("four factors ranked");
    assert_ne!(weakest.subscale, Subscale::Mystical);
    assert_eq!(weakest.band, Band::Minimal);
}

#[test]
fn paragraph_follows_fixed_subscale_order() {
    let mut answers = AnswerSet::uniform(1);
    for id in Subscale::Ineffability.canonical_ids() {
        answers.insert(*id, 5);
    }
    let scores = score(&answers).expect("valid answers");
    let paragraph = interpreter().interpret(&scores, "en").paragraph;

    let mystical = paragraph
        .find("faint traces of unity")
        .expect("mystical low sentence");
    let mood = paragraph
        .find("Moments of peace or wonder")
        .expect("positive mood low sentence");
    let time = paragraph
        .find("shifted only slightly")
        .expect("time/space low sentence");
    let ineffable = paragraph
        .find("lies beyond words met the threshold")
        .expect("ineffability meets sentence");
    assert!(mystical < mood && mood < time && time < ineffable);
}

#[test]
fn persian_text_is_selected_by_locale() {
    let scores = score(&AnswerSet::uniform(0)).expect("valid answers");
    let interpretation = interpreter().interpret(&scores, "fa");

    assert_eq!(interpretation.locale, "fa");
    assert!(interpretation
        .paragraph
        .starts_with("پاسخ‌های شما معیارهای یک تجربه‌ی عرفانی کامل را برآورده نمی‌کنند"));
}

#[test]
fn unsupported_locale_falls_back_to_default() {
    let scores = score(&AnswerSet::uniform(2)).expect("valid answers");
    let english = interpreter().interpret(&scores, "en");
    let fallback = interpreter().interpret(&scores, "ja");

    assert_eq!(fallback.locale, "en");
    assert_eq!(fallback.paragraph, english.paragraph);
}

#[test]
fn interpreter_is_total_over_scores_and_locales() {
    let interpreter = interpreter();
    for value in 0..=5u8 {
        for pivot in items() {
            let mut answers = AnswerSet::uniform(value);
            answers.insert(pivot.canonical_id, 5 - value);
            let scores = score(&answers).expect("valid answers");
            for locale in ["en", "fa", "", "zz"] {
                let interpretation = interpreter.interpret(&scores, locale);
                assert!(!interpretation.paragraph.is_empty());
                assert_eq!(interpretation.factors.len(), 4);
            }
        }
    }
}

#[test]
fn free_function_uses_the_builtin_repository() {
    let scores = score(&AnswerSet::uniform(4)).expect("valid answers");
    let interpretation = interpret(&scores, "fa");

    assert_eq!(interpretation.key, "meq30_repo");
    assert_eq!(interpretation, interpreter().interpret(&scores, "fa"));
}
