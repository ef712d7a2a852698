use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    aggregate::{DistrictShape, SplitReduction, SqrtEntropy},
    compactness::{polsby_popper, reock},
    config::ScoreConfig,
    data::{Metadata, Plan, StateInputs},
    error::ScoreResult,
    scorecard::{PlanAnalysis, analyze_plan},
    types::{DemographicCounts, DistrictId},
};

/// Headline metrics of one plan, rounded to the configured precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub num_districts: usize,
    pub num_counties: usize,
    pub total_pop: i64,
    pub population_deviation: f64,
    /// Statewide Democratic share of the two-party vote.
    pub estimated_vote_pct: Option<f64>,
    pub average_margin: Option<f64>,
    pub reock: f64,
    pub polsby_popper: f64,
    pub cut_edges: usize,
    pub spanning_tree_score: f64,
    pub county_splitting: f64,
    pub district_splitting: f64,
    pub counties_split: usize,
    pub county_splits: usize,
    /// Statewide share of voting-age population by group.
    pub demographics: BTreeMap<&'static str, f64>,
    pub details: ScorecardDetails,
}

/// Per-district breakdowns, left unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardDetails {
    pub districts: Vec<DistrictId>,
    pub counties: Vec<String>,
    pub pop_by_district: Vec<i64>,
    pub vote_shares: Vec<Option<f64>>,
    pub demographics: Vec<DemographicCounts>,
    pub shapes: Vec<DistrictShape>,
    pub reock: Vec<f64>,
    pub polsby_popper: Vec<f64>,
    pub spanning_tree_scores: Vec<f64>,
    pub county_split_scores: Vec<f64>,
    pub district_split_scores: Vec<f64>,
    /// County x district population matrix, one row per district.
    pub cxd: Vec<Vec<i64>>,
}

/// `(max - min) / target`, where the target is the whole-person ideal district population.
pub(crate) fn population_deviation(pop_by_district: &[i64], total_pop: i64) -> f64 {
    let (Some(&max), Some(&min)) = (pop_by_district.iter().max(), pop_by_district.iter().min()) else { return 0.0 };
    let target = total_pop / pop_by_district.len() as i64;
    if target > 0 { (max - min) as f64 / target as f64 } else { 0.0 }
}

/// Mean distance of district vote shares from an even split, over districts with votes.
pub(crate) fn average_margin(vote_shares: &[Option<f64>]) -> Option<f64> {
    let shares = vote_shares.iter().flatten().collect::<Vec<_>>();
    (!shares.is_empty()).then(|| shares.iter().map(|&&v| (v - 0.5).abs()).sum::<f64>() / shares.len() as f64)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() { 0.0 } else { values.iter().sum::<f64>() / values.len() as f64 }
}

impl Scorecard {
    /// Evaluate the closed-form metrics over a plan analysis.
    pub fn new(analysis: &PlanAnalysis, metadata: &Metadata, config: &ScoreConfig) -> Self {
        let PlanAnalysis { aggregates, shapes, discrete, splitting } = analysis;
        let round = |v: f64| config.round(v);

        let reock_by_district = shapes.iter().map(|s| reock(s.area, s.diameter)).collect::<Vec<_>>();
        let polsby_by_district = shapes.iter().map(|s| polsby_popper(s.area, s.perimeter)).collect::<Vec<_>>();
        let vote_shares = aggregates.vote_shares();

        let demographics = aggregates.demos_totals.vap_shares().unwrap_or_default().into_iter()
            .map(|(demo, share)| (demo.short_name(), round(share)))
            .collect();

        Self {
            num_districts: metadata.num_districts(),
            num_counties: metadata.num_counties(),
            total_pop: aggregates.total_pop,
            population_deviation: round(population_deviation(&aggregates.pop_by_district, aggregates.total_pop)),
            estimated_vote_pct: aggregates.statewide_vote_share().map(round),
            average_margin: average_margin(&vote_shares).map(round),
            reock: round(mean(&reock_by_district)),
            polsby_popper: round(mean(&polsby_by_district)),
            cut_edges: discrete.cut_edges,
            spanning_tree_score: round(discrete.spanning_tree_score),
            county_splitting: round(splitting.county_splitting),
            district_splitting: round(splitting.district_splitting),
            counties_split: splitting.counties_split,
            county_splits: splitting.county_splits,
            demographics,
            details: ScorecardDetails {
                districts: metadata.districts().to_vec(),
                counties: metadata.counties().to_vec(),
                pop_by_district: aggregates.pop_by_district.clone(),
                vote_shares,
                demographics: aggregates.demos_by_district.clone(),
                shapes: shapes.clone(),
                reock: reock_by_district,
                polsby_popper: polsby_by_district,
                spanning_tree_scores: discrete.spanning_tree_scores.clone(),
                county_split_scores: splitting.county_scores.clone(),
                district_split_scores: splitting.district_scores.clone(),
                cxd: aggregates.cxd.outer_iter().map(|row| row.to_vec()).collect(),
            },
        }
    }
}

/// Score one plan with the default split reduction.
pub fn score_plan(inputs: &StateInputs, plan: &Plan, config: &ScoreConfig) -> ScoreResult<Scorecard> {
    score_plan_with(inputs, plan, config, &SqrtEntropy)
}

/// Score one plan with a caller-supplied split reduction.
pub fn score_plan_with(
    inputs: &StateInputs,
    plan: &Plan,
    config: &ScoreConfig,
    reduction: &dyn SplitReduction,
) -> ScoreResult<Scorecard> {
    let analysis = analyze_plan(inputs, plan, config, reduction)?;
    Ok(Scorecard::new(&analysis, &inputs.metadata, config))
}
