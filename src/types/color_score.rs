use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Strong,
    Medium,
    Weak,
}

impl StrengthLabel {
    /// Both thresholds are strict: a score equal to `strong` is Medium.
    pub fn classify(score: f64, strong: f64, medium: f64) -> Self {
        if score > strong {
            StrengthLabel::Strong
        } else if score > medium {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Weak
        }
    }
}

/// Color strength of an extract photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScore {
    pub label: StrengthLabel,
    pub score: f64,
    /// Mean HSV saturation over the sample grid.
    pub saturation: f64,
    /// Mean HSV value over the sample grid.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(StrengthLabel::classify(0.36, 0.35, 0.20), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::classify(0.35, 0.35, 0.20), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::classify(0.21, 0.35, 0.20), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::classify(0.20, 0.35, 0.20), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::classify(0.0, 0.35, 0.20), StrengthLabel::Weak);
    }

    #[test]
    fn nan_score_is_weak() {
        assert_eq!(StrengthLabel::classify(f64::NAN, 0.35, 0.20), StrengthLabel::Weak);
    }
}
