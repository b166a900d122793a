use serde::{Deserialize, Serialize};

/// Ordered intensity bands over a factor's share of its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    Minimal,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Minimal,
        Band::Low,
        Band::Moderate,
        Band::High,
        Band::VeryHigh,
    ];

    /// Classifies a fraction in `0.0..=1.0`; boundaries are inclusive at the lower end.
    pub fn classify(fraction: f64) -> Self {
        if fraction >= 0.8 {
            Band::VeryHigh
        } else if fraction >= 0.6 {
            Band::High
        } else if fraction >= 0.4 {
            Band::Moderate
        } else if fraction >= 0.2 {
            Band::Low
        } else {
            Band::Minimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Minimal => "minimal",
            Band::Low => "low",
            Band::Moderate => "moderate",
            Band::High => "high",
            Band::VeryHigh => "very high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_upper_band() {
        assert_eq!(Band::classify(0.0), Band::Minimal);
        assert_eq!(Band::classify(0.1999), Band::Minimal);
        assert_eq!(Band::classify(0.2), Band::Low);
        assert_eq!(Band::classify(0.4), Band::Moderate);
        assert_eq!(Band::classify(0.5999), Band::Moderate);
        assert_eq!(Band::classify(0.6), Band::High);
        assert_eq!(Band::classify(0.8), Band::VeryHigh);
        assert_eq!(Band::classify(1.0), Band::VeryHigh);
    }

    #[test]
    fn non_finite_input_stays_in_a_band() {
        assert_eq!(Band::classify(f64::NAN), Band::Minimal);
    }
}
