//! Threshold strategies
//!
//! A named risk profile mapping to a fixed cosine-similarity cutoff.

use std::fmt;

/// Risk profile for accepting a clue
///
/// Higher cutoffs accept fewer, safer clues. The anti-avoid check uses a multiple of
/// the same cutoff, so a higher cutoff also tolerates closer avoid words.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ThresholdStrategy {
    /// Accept loosely connected clues (cutoff 0.25)
    Risky,
    /// Default balance (cutoff 0.35)
    #[default]
    Moderate,
    /// Only tightly connected clues (cutoff 0.45)
    Conservative,
    /// Explicit numeric cutoff
    Custom(f64),
}

impl ThresholdStrategy {
    pub const RISKY: f64 = 0.25;
    pub const MODERATE: f64 = 0.35;
    pub const CONSERVATIVE: f64 = 0.45;

    /// Parse a strategy name or a numeric cutoff
    ///
    /// Accepts "risky", "moderate", "conservative" (any case) or a number strictly
    /// between -1 and 1. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::ThresholdStrategy;
    ///
    /// assert_eq!(ThresholdStrategy::from_name("Risky"), Some(ThresholdStrategy::Risky));
    /// assert_eq!(ThresholdStrategy::from_name("0.3"), Some(ThresholdStrategy::Custom(0.3)));
    /// assert_eq!(ThresholdStrategy::from_name("reckless"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "risky" => Some(Self::Risky),
            "moderate" => Some(Self::Moderate),
            "conservative" => Some(Self::Conservative),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && value.abs() < 1.0)
                .map(Self::Custom),
        }
    }

    /// Numeric cosine-similarity cutoff for this strategy
    #[must_use]
    pub const fn cutoff(self) -> f64 {
        match self {
            Self::Risky => Self::RISKY,
            Self::Moderate => Self::MODERATE,
            Self::Conservative => Self::CONSERVATIVE,
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for ThresholdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Risky => write!(f, "risky"),
            Self::Moderate => write!(f, "moderate"),
            Self::Conservative => write!(f, "conservative"),
            Self::Custom(value) => write!(f, "custom ({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_resolve() {
        assert_eq!(ThresholdStrategy::from_name("risky"), Some(ThresholdStrategy::Risky));
        assert_eq!(
            ThresholdStrategy::from_name("MODERATE"),
            Some(ThresholdStrategy::Moderate)
        );
        assert_eq!(
            ThresholdStrategy::from_name(" conservative "),
            Some(ThresholdStrategy::Conservative)
        );
    }

    #[test]
    fn cutoffs_increase_with_caution() {
        let risky = ThresholdStrategy::Risky.cutoff();
        let moderate = ThresholdStrategy::Moderate.cutoff();
        let conservative = ThresholdStrategy::Conservative.cutoff();
        assert!(risky < moderate);
        assert!(moderate < conservative);
        assert!((moderate - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_names_become_custom() {
        assert_eq!(
            ThresholdStrategy::from_name("0.3").map(ThresholdStrategy::cutoff),
            Some(0.3)
        );
        assert_eq!(
            ThresholdStrategy::from_name("-0.1"),
            Some(ThresholdStrategy::Custom(-0.1))
        );
    }

    #[test]
    fn rejects_unknown_and_out_of_range() {
        assert_eq!(ThresholdStrategy::from_name("reckless"), None);
        assert_eq!(ThresholdStrategy::from_name(""), None);
        assert_eq!(ThresholdStrategy::from_name("1.5"), None);
        assert_eq!(ThresholdStrategy::from_name("NaN"), None);
        assert_eq!(ThresholdStrategy::from_name("inf"), None);
    }

    #[test]
    fn default_is_moderate() {
        assert_eq!(ThresholdStrategy::default(), ThresholdStrategy::Moderate);
    }

    #[test]
    fn display_names() {
        assert_eq!(ThresholdStrategy::Risky.to_string(), "risky");
        assert_eq!(ThresholdStrategy::Custom(0.3).to_string(), "custom (0.3)");
    }
}
