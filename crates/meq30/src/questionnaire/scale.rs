use super::localized;

pub const MIN_RESPONSE: u8 = 0;
pub const MAX_RESPONSE: u8 = 5;

/// One labelled point of the six-point intensity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseAnchor {
    pub value: u8,
    labels: &'static [(&'static str, &'static str)],
}

impl ResponseAnchor {
    pub fn label(&self, locale: &str) -> &'static str {
        localized(self.labels, locale)
    }
}

/// Likert anchors shared by every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseScale;

static ANCHORS: [ResponseAnchor; 6] = [
    ResponseAnchor {
        value: 0,
        labels: &[("en", "none; not at all"), ("fa", "هیچ؛ اصلاً")],
    },
    ResponseAnchor {
        value: 1,
        labels: &[
            ("en", "so slight; cannot decide"),
            ("fa", "آن‌قدر خفیف که نمی‌توانم تصمیم بگیرم"),
        ],
    },
    ResponseAnchor {
        value: 2,
        labels: &[("en", "slight"), ("fa", "خفیف")],
    },
    ResponseAnchor {
        value: 3,
        labels: &[("en", "moderate"), ("fa", "متوسط")],
    },
    ResponseAnchor {
        value: 4,
        labels: &[("en", "strong"), ("fa", "قوی")],
    },
    ResponseAnchor {
        value: 5,
        labels: &[("en", "extreme"), ("fa", "شدید")],
    },
];

impl ResponseScale {
    pub fn anchors() -> &'static [ResponseAnchor] {
        &ANCHORS
    }

    pub fn contains(value: i64) -> bool {
        (i64::from(MIN_RESPONSE)..=i64::from(MAX_RESPONSE)).contains(&value)
    }
}
