use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high tier
pub const HIGH_THRESHOLD: f64 = 8.0;
/// Lower bound (inclusive) of the moderate tier
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Geographic coordinates resolved from the configured ZIP code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// UV severity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UvLevel {
    Low,
    Moderate,
    High,
}

impl UvLevel {
    /// Map a UV index onto a tier.
    ///
    /// Each tier includes its lower bound. NaN fails both comparisons and lands in `Low`.
    pub fn classify(uv_index: f64) -> Self {
        if uv_index >= HIGH_THRESHOLD {
            Self::High
        } else if uv_index >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Alert text published for this tier
    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Low UV index.",
            Self::Moderate => "Moderate UV index.",
            Self::High => "High UV index! Be careful.",
        }
    }
}

/// Shorthand for `UvLevel::classify`
pub fn classify(uv_index: f64) -> UvLevel {
    UvLevel::classify(uv_index)
}
