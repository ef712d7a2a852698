use ndarray::{Array2, Axis};

use crate::{
    data::{Metadata, Plan, PrecinctTable},
    error::{ScoreError, ScoreResult},
    types::DemographicCounts,
};

/// Population, vote and demographic totals of one plan, statewide and per district.
///
/// Vote totals are two-party: Democratic plus Republican, other parties excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictAggregates {
    pub total_pop: i64,
    pub pop_by_district: Vec<i64>,
    pub total_votes: i64,
    pub total_d_votes: i64,
    pub d_by_district: Vec<i64>,
    pub tot_by_district: Vec<i64>,
    pub demos_totals: DemographicCounts,
    pub demos_by_district: Vec<DemographicCounts>,

    /// County x district population matrix with districts as rows.
    pub cxd: Array2<i64>,
}

impl DistrictAggregates {
    /// Zeroed aggregates sized for `metadata`.
    fn zeros(metadata: &Metadata) -> Self {
        let d = metadata.num_districts();
        Self {
            total_pop: 0,
            pop_by_district: vec![0; d],
            total_votes: 0,
            total_d_votes: 0,
            d_by_district: vec![0; d],
            tot_by_district: vec![0; d],
            demos_totals: DemographicCounts::default(),
            demos_by_district: vec![DemographicCounts::default(); d],
            cxd: Array2::zeros((d, metadata.num_counties())),
        }
    }

    /// Accumulate every assigned precinct in a single pass over the plan.
    ///
    /// A precinct missing from the table, or a district or county missing from
    /// the metadata, fails the whole call.
    pub fn aggregate(plan: &Plan, precincts: &PrecinctTable, metadata: &Metadata) -> ScoreResult<Self> {
        let mut agg = Self::zeros(metadata);

        for a in plan.assignments() {
            let precinct = precincts.get(&a.geoid)
                .ok_or_else(|| ScoreError::MissingPrecinct { geoid: a.geoid.clone(), table: "precinct table" })?;
            let i = metadata.district_index(&a.district)?;
            let j = metadata.county_index(&a.geoid)?;

            agg.total_pop += precinct.total_pop;
            agg.pop_by_district[i] += precinct.total_pop;

            let two_party = precinct.two_party_votes();
            agg.total_votes += two_party;
            agg.total_d_votes += precinct.dem_votes;
            agg.d_by_district[i] += precinct.dem_votes;
            agg.tot_by_district[i] += two_party;

            agg.demos_totals += &precinct.demographics;
            agg.demos_by_district[i] += &precinct.demographics;

            agg.cxd[[i, j]] += precinct.total_pop;
        }

        Ok(agg)
    }

    #[inline] pub fn num_districts(&self) -> usize { self.pop_by_district.len() }

    /// Population of each county (column sums of the CxD matrix).
    pub fn pop_by_county(&self) -> Vec<i64> {
        self.cxd.sum_axis(Axis(0)).to_vec()
    }

    /// Democratic share of the two-party vote in each district, `None` where no votes were cast.
    pub fn vote_shares(&self) -> Vec<Option<f64>> {
        self.d_by_district.iter().zip(&self.tot_by_district)
            .map(|(&d, &tot)| (tot > 0).then(|| d as f64 / tot as f64))
            .collect()
    }

    /// Statewide Democratic share of the two-party vote.
    pub fn statewide_vote_share(&self) -> Option<f64> {
        (self.total_votes > 0).then(|| self.total_d_votes as f64 / self.total_votes as f64)
    }
}
