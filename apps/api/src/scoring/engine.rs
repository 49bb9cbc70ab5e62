//! Module scoring: groups a session's responses by dimension, sums their
//! points and normalizes every dimension plus the module-wide total.
//!
//! Pure and deterministic. Dimensions are emitted in the order they are first
//! seen in the response list, so identical inputs serialize identically.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::assessment::ResponseWithQuestion;
use crate::scoring::dimensions::resolve_dimension;
use crate::scoring::extract::extract_points;
use crate::scoring::normalize::{categorize_score, normalize_score, ScoreCategory};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensionScore {
    pub dimension: String,
    pub raw_score: f64,
    pub max_possible: f64,
    pub normalized_score: i32, // 0 – 100
    pub category: ScoreCategory,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleScoringResult {
    pub assessment_id: Uuid,
    pub module_code: String,
    pub dimensions: Vec<DimensionScore>,
    pub total_raw: f64,
    pub total_max: f64,
    pub total_normalized: i32,
    pub total_category: ScoreCategory,
}

/// Running sums for one dimension. `min_possible` only feeds normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionTally {
    pub dimension: String,
    pub raw_score: f64,
    pub max_possible: f64,
    pub min_possible: f64,
    pub question_count: usize,
}

impl DimensionTally {
    fn new(dimension: String) -> Self {
        Self {
            dimension,
            raw_score: 0.0,
            max_possible: 0.0,
            min_possible: 0.0,
            question_count: 0,
        }
    }

    fn into_score(self) -> DimensionScore {
        let normalized_score = normalize_score(self.raw_score, self.min_possible, self.max_possible);
        DimensionScore {
            dimension: self.dimension,
            raw_score: self.raw_score,
            max_possible: self.max_possible,
            normalized_score,
            category: categorize_score(normalized_score),
            question_count: self.question_count,
        }
    }
}

/// Groups responses by resolved dimension. Every returned tally has at least
/// one contributing response.
pub fn aggregate_dimensions(
    responses: &[ResponseWithQuestion],
    module_code: &str,
) -> Vec<DimensionTally> {
    let mut tallies: Vec<DimensionTally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for response in responses {
        let dimension = resolve_dimension(response.question_category.as_deref(), module_code);
        let points = extract_points(response);

        let slot = match index.get(&dimension) {
            Some(&i) => i,
            None => {
                index.insert(dimension.clone(), tallies.len());
                tallies.push(DimensionTally::new(dimension));
                tallies.len() - 1
            }
        };

        let tally = &mut tallies[slot];
        tally.raw_score += points.points;
        tally.max_possible += points.max;
        tally.min_possible += points.min;
        tally.question_count += 1;
    }

    tallies
}

/// Scores one completed session of one assessment.
///
/// The module total sums raw, min and max points across all dimensions before
/// normalizing, so each dimension weighs in proportion to its point budget
/// rather than counting equally.
pub fn calculate_assessment_scores(
    assessment_id: Uuid,
    module_code: &str,
    responses: &[ResponseWithQuestion],
) -> ModuleScoringResult {
    let tallies = aggregate_dimensions(responses, module_code);

    let total_raw: f64 = tallies.iter().map(|t| t.raw_score).sum();
    let total_max: f64 = tallies.iter().map(|t| t.max_possible).sum();
    let total_min: f64 = tallies.iter().map(|t| t.min_possible).sum();

    let total_normalized = normalize_score(total_raw, total_min, total_max);

    ModuleScoringResult {
        assessment_id,
        module_code: module_code.to_string(),
        dimensions: tallies.into_iter().map(DimensionTally::into_score).collect(),
        total_raw,
        total_max,
        total_normalized,
        total_category: categorize_score(total_normalized),
    }
}
