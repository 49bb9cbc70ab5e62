use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::engine::ModuleScoringResult;
use crate::scoring::normalize::ScoreCategory;

/// Dimension name of the module-wide aggregate row.
pub const TOTAL_DIMENSION: &str = "Total";

/// A storage-ready score row. The store upserts on
/// `(user_id, assessment_id, dimension)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewScoreRow {
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub dimension: String,
    pub raw_score: f64,
    pub normalized_score: i32,
    pub category: ScoreCategory,
}

/// Flattens a scoring result into one row per dimension followed by a single
/// `Total` row. No deduplication against stored rows happens here.
pub fn prepare_score_rows(
    user_id: Uuid,
    assessment_id: Uuid,
    result: &ModuleScoringResult,
) -> Vec<NewScoreRow> {
    let mut rows: Vec<NewScoreRow> = result
        .dimensions
        .iter()
        .map(|dim| NewScoreRow {
            user_id,
            assessment_id,
            dimension: dim.dimension.clone(),
            raw_score: dim.raw_score,
            normalized_score: dim.normalized_score,
            category: dim.category,
        })
        .collect();

    rows.push(NewScoreRow {
        user_id,
        assessment_id,
        dimension: TOTAL_DIMENSION.to_string(),
        raw_score: result.total_raw,
        normalized_score: result.total_normalized,
        category: result.total_category,
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::DimensionScore;

    fn dimension(name: &str, raw: f64, normalized: i32, category: ScoreCategory) -> DimensionScore {
        DimensionScore {
            dimension: name.to_string(),
            raw_score: raw,
            max_possible: 10.0,
            normalized_score: normalized,
            category,
            question_count: 2,
        }
    }

    fn result(dimensions: Vec<DimensionScore>) -> ModuleScoringResult {
        ModuleScoringResult {
            assessment_id: Uuid::new_v4(),
            module_code: "PER-02".to_string(),
            dimensions,
            total_raw: 14.0,
            total_max: 20.0,
            total_normalized: 61,
            total_category: ScoreCategory::Medium,
        }
    }

    #[test]
    fn test_dimension_rows_then_total() {
        let user_id = Uuid::new_v4();
        let assessment_id = Uuid::new_v4();
        let scored = result(vec![
            dimension("Dominance", 9.0, 88, ScoreCategory::High),
            dimension("Influence", 5.0, 38, ScoreCategory::Low),
        ]);

        let rows = prepare_score_rows(user_id, assessment_id, &scored);

        let names: Vec<&str> = rows.iter().map(|r| r.dimension.as_str()).collect();
        assert_eq!(names, vec!["Dominance", "Influence", "Total"]);
        assert!(rows
            .iter()
            .all(|r| r.user_id == user_id && r.assessment_id == assessment_id));
        assert_eq!(rows[1].normalized_score, 38);
        assert_eq!(rows[1].category, ScoreCategory::Low);
    }

    #[test]
    fn test_total_row_carries_module_aggregate() {
        let rows = prepare_score_rows(
            Uuid::new_v4(),
            Uuid::new_v4(),
            &result(vec![dimension("Steadiness", 14.0, 61, ScoreCategory::Medium)]),
        );
        let total = rows.last().unwrap();
        assert_eq!(total.dimension, TOTAL_DIMENSION);
        assert_eq!(total.raw_score, 14.0);
        assert_eq!(total.normalized_score, 61);
        assert_eq!(total.category, ScoreCategory::Medium);
    }

    #[test]
    fn test_exactly_one_total_row() {
        let rows = prepare_score_rows(Uuid::new_v4(), Uuid::new_v4(), &result(vec![]));
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows.iter()
                .filter(|r| r.dimension == TOTAL_DIMENSION)
                .count(),
            1
        );
    }
}
