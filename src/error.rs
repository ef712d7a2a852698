use thiserror::Error;

use crate::types::{DistrictId, GeoId};

/// Reasons a single plan cannot be scored.
///
/// Every variant is fatal for the plan being scored and nothing else: an
/// ensemble driver records the error and moves on to the next plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("precinct {geoid} is missing from the {table}")]
    MissingPrecinct { geoid: GeoId, table: &'static str },

    #[error("precinct {geoid} is assigned more than once")]
    DuplicateAssignment { geoid: GeoId },

    #[error("district {0} is not in the district index")]
    UnknownDistrict(DistrictId),

    #[error("county {county} (from precinct {geoid}) is not in the county index")]
    UnknownCounty { county: String, geoid: GeoId },

    #[error("precinct {from} lists neighbor {to}, which is not a vertex of the graph")]
    MissingVertex { from: GeoId, to: GeoId },

    #[error("no arc length recorded between {from} and {to}")]
    MissingArc { from: GeoId, to: GeoId },

    #[error("plan covers {plan} of {graph} graph vertices")]
    VertexMismatch { plan: usize, graph: usize },

    #[error("district index {index} is out of range for {districts} districts")]
    DistrictOutOfRange { index: usize, districts: usize },

    #[error("plan has no assignments")]
    EmptyPlan,

    #[error("district {0} has no precincts")]
    EmptyDistrict(DistrictId),

    #[error("district {0} is not contiguous (singular reduced Laplacian)")]
    DisconnectedDistrict(DistrictId),

    #[error("{what}: county-district matrix total {matrix} differs from aggregate {aggregate}")]
    InconsistentTotals { what: &'static str, matrix: i64, aggregate: i64 },
}

pub type ScoreResult<T> = Result<T, ScoreError>;
