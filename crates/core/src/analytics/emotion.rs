use std::fmt;

use serde::Serialize;

/// Five-step satisfaction scale for review log emotional indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionalBucket {
    VerySatisfied,
    Satisfied,
    Neutral,
    Unsatisfied,
    Dissatisfied,
}

impl EmotionalBucket {
    /// Maps an indicator to its bucket. Total over all integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use studytrack_core::analytics::EmotionalBucket;
    ///
    /// assert_eq!(EmotionalBucket::from_indicator(5), EmotionalBucket::VerySatisfied);
    /// assert_eq!(EmotionalBucket::from_indicator(0), EmotionalBucket::Dissatisfied);
    /// ```
    pub fn from_indicator(indicator: i32) -> Self {
        match indicator {
            i32::MIN..=0 => EmotionalBucket::Dissatisfied,
            1 => EmotionalBucket::Unsatisfied,
            2 => EmotionalBucket::Neutral,
            3 => EmotionalBucket::Satisfied,
            _ => EmotionalBucket::VerySatisfied,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionalBucket::VerySatisfied => "very satisfied",
            EmotionalBucket::Satisfied => "satisfied",
            EmotionalBucket::Neutral => "neutral",
            EmotionalBucket::Unsatisfied => "unsatisfied",
            EmotionalBucket::Dissatisfied => "dissatisfied",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            EmotionalBucket::VerySatisfied => "😊",
            EmotionalBucket::Satisfied => "🙂",
            EmotionalBucket::Neutral => "😐",
            EmotionalBucket::Unsatisfied => "😕",
            EmotionalBucket::Dissatisfied => "😞",
        }
    }
}

impl fmt::Display for EmotionalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
