use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest normalized score still categorized as `Low`.
pub const LOW_MAX: i32 = 40;
/// Highest normalized score still categorized as `Medium`.
pub const MEDIUM_MAX: i32 = 70;

/// Ordinal bucket derived from a 0–100 normalized score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreCategory {
    Low,
    Medium,
    High,
}

impl ScoreCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Low => "Low",
            ScoreCategory::Medium => "Medium",
            ScoreCategory::High => "High",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rescales `raw` from `[min, max]` onto 0–100, clamped and rounded half up.
/// A degenerate scale (`max == min`) counts as full attainment.
pub fn normalize_score(raw: f64, min: f64, max: f64) -> i32 {
    if max == min {
        return 100;
    }
    let normalized = ((raw - min) / (max - min)) * 100.0;
    // clamp() passes NaN through; a NaN ratio has no meaningful position on the scale
    if normalized.is_nan() {
        return 0;
    }
    normalized.clamp(0.0, 100.0).round() as i32
}

/// `0..=40` → Low, `41..=70` → Medium, `71..` → High.
pub fn categorize_score(normalized_score: i32) -> ScoreCategory {
    if normalized_score <= LOW_MAX {
        ScoreCategory::Low
    } else if normalized_score <= MEDIUM_MAX {
        ScoreCategory::Medium
    } else {
        ScoreCategory::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_midpoint() {
        assert_eq!(normalize_score(12.0, 3.0, 15.0), 75);
        assert_eq!(normalize_score(1.0, 0.0, 3.0), 33);
    }

    #[test]
    fn test_normalize_rounds_half_up() {
        // 0.5 / 1 * 100 = 50; 1/8 = 12.5 → 13
        assert_eq!(normalize_score(0.5, 0.0, 1.0), 50);
        assert_eq!(normalize_score(1.0, 0.0, 8.0), 13);
        assert_eq!(normalize_score(5.0, 0.0, 8.0), 63); // 62.5
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(normalize_score(-4.0, 0.0, 10.0), 0);
        assert_eq!(normalize_score(0.0, 1.0, 5.0), 0);
        assert_eq!(normalize_score(40.0, 0.0, 10.0), 100);
    }

    #[test]
    fn test_degenerate_scale_is_100() {
        for (raw, k) in [(0.0, 0.0), (7.0, 3.0), (-1.0, 5.0), (1e9, 1e9)] {
            assert_eq!(normalize_score(raw, k, k), 100, "raw={raw} k={k}");
        }
    }

    #[test]
    fn test_normalize_always_within_bounds() {
        let samples = [-100.0, -1.0, 0.0, 0.3, 1.0, 2.5, 5.0, 17.0, 1000.0];
        for raw in samples {
            for min in [-5.0, 0.0, 1.0, 3.0] {
                for span in [0.0, 0.5, 1.0, 4.0, 12.0, 250.0] {
                    let score = normalize_score(raw, min, min + span);
                    assert!((0..=100).contains(&score), "raw={raw} min={min} span={span}");
                }
            }
        }
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(categorize_score(0), ScoreCategory::Low);
        assert_eq!(categorize_score(40), ScoreCategory::Low);
        assert_eq!(categorize_score(41), ScoreCategory::Medium);
        assert_eq!(categorize_score(70), ScoreCategory::Medium);
        assert_eq!(categorize_score(71), ScoreCategory::High);
        assert_eq!(categorize_score(100), ScoreCategory::High);
    }

    #[test]
    fn test_categories_partition_the_scale() {
        let mut counts = [0usize; 3];
        for s in 0..=100 {
            match categorize_score(s) {
                ScoreCategory::Low => counts[0] += 1,
                ScoreCategory::Medium => counts[1] += 1,
                ScoreCategory::High => counts[2] += 1,
            }
        }
        assert_eq!(counts, [41, 30, 30]);
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&ScoreCategory::Medium).unwrap(),
            "\"Medium\""
        );
        assert_eq!(ScoreCategory::High.to_string(), "High");
    }
}
