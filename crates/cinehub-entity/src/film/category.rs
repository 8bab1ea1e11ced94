//! Length-based film categorization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Film categories bucketed by running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthCategory {
    /// Length is not recorded.
    Unknown,
    /// Under 40 minutes.
    Short,
    /// Under 120 minutes.
    Feature,
    /// Under 180 minutes.
    Long,
    /// 180 minutes or more.
    Epic,
}

impl LengthCategory {
    /// Bucket a running time into a category.
    pub fn classify(length: Option<i32>) -> Self {
        match length {
            None => Self::Unknown,
            Some(l) if l < 40 => Self::Short,
            Some(l) if l < 120 => Self::Feature,
            Some(l) if l < 180 => Self::Long,
            Some(_) => Self::Epic,
        }
    }

    /// Human-readable category name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown Length",
            Self::Short => "Short Film",
            Self::Feature => "Feature Film",
            Self::Long => "Long Film",
            Self::Epic => "Epic Film",
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_buckets() {
        assert_eq!(LengthCategory::classify(Some(30)), LengthCategory::Short);
        assert_eq!(LengthCategory::classify(Some(90)), LengthCategory::Feature);
        assert_eq!(LengthCategory::classify(Some(150)), LengthCategory::Long);
        assert_eq!(LengthCategory::classify(Some(200)), LengthCategory::Epic);
        assert_eq!(LengthCategory::classify(None), LengthCategory::Unknown);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(LengthCategory::classify(Some(39)), LengthCategory::Short);
        assert_eq!(LengthCategory::classify(Some(40)), LengthCategory::Feature);
        assert_eq!(LengthCategory::classify(Some(119)), LengthCategory::Feature);
        assert_eq!(LengthCategory::classify(Some(120)), LengthCategory::Long);
        assert_eq!(LengthCategory::classify(Some(179)), LengthCategory::Long);
        assert_eq!(LengthCategory::classify(Some(180)), LengthCategory::Epic);
    }
}
