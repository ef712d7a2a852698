//! Per-plan scoring: aggregation, closed-form metrics and ensemble driving.

mod analysis;
mod ensemble;
mod scorecard;

pub use analysis::{PlanAnalysis, analyze_plan};
pub use ensemble::score_ensemble;
pub use scorecard::{Scorecard, ScorecardDetails, score_plan, score_plan_with};
