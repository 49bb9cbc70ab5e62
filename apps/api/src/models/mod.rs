pub mod assessment;
pub mod score;
