use ahash::AHashMap;

use crate::types::{DemographicCounts, GeoId};

/// Census and election attributes of one precinct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Precinct {
    pub total_pop: i64,
    pub demographics: DemographicCounts,
    pub rep_votes: i64,
    pub dem_votes: i64,
}

impl Precinct {
    /// Democratic plus Republican votes.
    #[inline] pub fn two_party_votes(&self) -> i64 { self.dem_votes + self.rep_votes }
}

/// Precinct attributes keyed by GEOID.
pub type PrecinctTable = AHashMap<GeoId, Precinct>;
