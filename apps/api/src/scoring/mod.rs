// Assessment scoring: dimension resolution, point extraction, aggregation,
// normalization and projection into storage rows.
// The engine (dimensions, extract, normalize, engine, rows) is pure and
// synchronous; only store and handlers touch I/O.

pub mod dimensions;
pub mod engine;
pub mod extract;
pub mod handlers;
pub mod interpretations;
pub mod normalize;
pub mod rows;
pub mod store;

// Re-export the public API consumed by handlers and the store.
pub use engine::{calculate_assessment_scores, DimensionScore, ModuleScoringResult};
pub use rows::{prepare_score_rows, NewScoreRow};
