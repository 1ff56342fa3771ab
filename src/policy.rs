use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// What happens to a value typed into a numeric field that falls outside the
/// paired slider's range. Emitters never clamp; this only governs edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericPolicy {
    /// Keep the typed value as is.
    #[default]
    PassThrough,
    /// Pin the typed value to the slider range.
    Clamp,
}

impl NumericPolicy {
    pub fn apply<T: PartialOrd + Copy>(self, value: T, range: &RangeInclusive<T>) -> T {
        match self {
            Self::PassThrough => value,
            Self::Clamp => {
                if value < *range.start() {
                    *range.start()
                } else if value > *range.end() {
                    *range.end()
                } else {
                    value
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PassThrough => "Pass through",
            Self::Clamp => "Clamp to slider range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumericPolicy;

    #[test]
    fn test_pass_through_keeps_out_of_range() {
        assert_eq!(NumericPolicy::PassThrough.apply(270.0, &(-180.0..=180.0)), 270.0);
    }

    #[test]
    fn test_clamp_pins_to_range() {
        let range = -180.0..=180.0;
        assert_eq!(NumericPolicy::Clamp.apply(270.0, &range), 180.0);
        assert_eq!(NumericPolicy::Clamp.apply(-999.0, &range), -180.0);
        assert_eq!(NumericPolicy::Clamp.apply(12, &(0..=50)), 12);
    }
}
