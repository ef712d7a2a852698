use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::{
    data::{Plan, PrecinctTable},
    error::{ScoreError, ScoreResult},
    types::{DistrictId, GeoId},
};

/// Stable row/column indices for districts and counties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    districts: Vec<DistrictId>,
    counties: Vec<String>,
    district_to_index: AHashMap<DistrictId, usize>,
    county_to_index: AHashMap<String, usize>,
}

impl Metadata {
    /// Build index maps from district labels and county FIPS codes.
    /// Both lists are sorted and deduplicated so indices do not depend on input order.
    pub fn new(
        districts: impl IntoIterator<Item = DistrictId>,
        counties: impl IntoIterator<Item = String>,
    ) -> Self {
        let districts = districts.into_iter().collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>();
        let counties = counties.into_iter().collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>();

        Self {
            district_to_index: districts.iter().cloned().enumerate().map(|(i, d)| (d, i)).collect(),
            county_to_index: counties.iter().cloned().enumerate().map(|(i, c)| (c, i)).collect(),
            districts,
            counties,
        }
    }

    /// Districts numbered `1..=num_districts`, counties scanned from the precinct table.
    pub fn from_precincts(precincts: &PrecinctTable, num_districts: u32) -> Self {
        Self::new((1..=num_districts).map(DistrictId::Number), counties_of(precincts))
    }

    /// Districts taken from the distinct labels of a plan.
    pub fn from_plan(precincts: &PrecinctTable, plan: &Plan) -> Self {
        Self::new(plan.districts(), counties_of(precincts))
    }

    /// Number of districts (D).
    #[inline] pub fn num_districts(&self) -> usize { self.districts.len() }

    /// Number of counties (C).
    #[inline] pub fn num_counties(&self) -> usize { self.counties.len() }

    #[inline] pub fn districts(&self) -> &[DistrictId] { &self.districts }

    #[inline] pub fn counties(&self) -> &[String] { &self.counties }

    /// Row index of a district.
    pub fn district_index(&self, district: &DistrictId) -> ScoreResult<usize> {
        self.district_to_index.get(district).copied()
            .ok_or_else(|| ScoreError::UnknownDistrict(district.clone()))
    }

    /// Column index of the county containing `geoid`.
    pub fn county_index(&self, geoid: &GeoId) -> ScoreResult<usize> {
        let county = geoid.county_fips();
        self.county_to_index.get(county).copied()
            .ok_or_else(|| ScoreError::UnknownCounty { county: county.to_string(), geoid: geoid.clone() })
    }
}

fn counties_of(precincts: &PrecinctTable) -> impl Iterator<Item = String> + '_ {
    precincts.keys().map(|geoid| geoid.county_fips().to_string())
}
