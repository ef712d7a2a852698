use ndarray::{ArrayView1, ArrayView2, Axis};
use serde::Serialize;

use crate::{
    aggregate::DistrictAggregates,
    error::{ScoreError, ScoreResult},
};

/// Turns county x district involvement into per-county and per-district split scores.
///
/// Implementations see the raw matrix (districts as rows) along with its row
/// and column totals. Units with zero population must score 0.
pub trait SplitReduction: Send + Sync {
    /// Score of one unit from its population in each part and its total.
    fn unit_score(&self, parts: ArrayView1<i64>, total: i64) -> f64;

    /// Score of every county (matrix column).
    fn county_scores(&self, cxd: ArrayView2<i64>, county_totals: &[i64]) -> Vec<f64> {
        cxd.axis_iter(Axis(1)).zip(county_totals)
            .map(|(column, &total)| self.unit_score(column, total))
            .collect()
    }

    /// Score of every district (matrix row).
    fn district_scores(&self, cxd: ArrayView2<i64>, district_totals: &[i64]) -> Vec<f64> {
        cxd.axis_iter(Axis(0)).zip(district_totals)
            .map(|(row, &total)| self.unit_score(row, total))
            .collect()
    }
}

/// Square-root entropy: `sum_k sqrt(part_k / total)`.
///
/// 1.0 for a unit wholly inside one counterpart, rising with each additional
/// counterpart it is spread across.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqrtEntropy;

impl SplitReduction for SqrtEntropy {
    fn unit_score(&self, parts: ArrayView1<i64>, total: i64) -> f64 {
        if total <= 0 { return 0.0 }
        parts.iter().map(|&p| (p.max(0) as f64 / total as f64).sqrt()).sum()
    }
}

/// County and district splitting, reduced and raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Splitting {
    /// Population-weighted mean of the county scores.
    pub county_splitting: f64,
    /// Population-weighted mean of the district scores.
    pub district_splitting: f64,
    /// Counties with population in more than one district.
    pub counties_split: usize,
    /// Sum over split counties of (districts touching it - 1).
    pub county_splits: usize,
    pub county_scores: Vec<f64>,
    pub district_scores: Vec<f64>,
}

impl Splitting {
    /// Reduce the CxD matrix of `agg`, first checking its margins against the
    /// aggregator's own totals.
    pub fn reduce(agg: &DistrictAggregates, reduction: &dyn SplitReduction) -> ScoreResult<Self> {
        let cxd = agg.cxd.view();
        let district_totals = cxd.sum_axis(Axis(1)).to_vec();
        let county_totals = cxd.sum_axis(Axis(0)).to_vec();

        for (&matrix, &aggregate) in district_totals.iter().zip(&agg.pop_by_district) {
            if matrix != aggregate {
                return Err(ScoreError::InconsistentTotals { what: "district population", matrix, aggregate });
            }
        }
        let matrix = county_totals.iter().sum::<i64>();
        if matrix != agg.total_pop {
            return Err(ScoreError::InconsistentTotals { what: "statewide population", matrix, aggregate: agg.total_pop });
        }

        let county_scores = reduction.county_scores(cxd, &county_totals);
        let district_scores = reduction.district_scores(cxd, &district_totals);

        let (counties_split, county_splits) = cxd.axis_iter(Axis(1))
            .map(|column| column.iter().filter(|&&pop| pop > 0).count())
            .filter(|&touching| touching > 1)
            .fold((0, 0), |(split, splits), touching| (split + 1, splits + touching - 1));

        Ok(Self {
            county_splitting: weighted_mean(&county_scores, &county_totals),
            district_splitting: weighted_mean(&district_scores, &district_totals),
            counties_split,
            county_splits,
            county_scores,
            district_scores,
        })
    }
}

fn weighted_mean(scores: &[f64], weights: &[i64]) -> f64 {
    let total = weights.iter().sum::<i64>();
    if total <= 0 { return 0.0 }
    scores.iter().zip(weights).map(|(&s, &w)| s * w as f64).sum::<f64>() / total as f64
}
