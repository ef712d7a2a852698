#![doc = "Redistricting plan scoring: district aggregation, geometric and graph compactness, county splitting"]
mod aggregate;
mod compactness;
mod config;
mod data;
mod error;
mod graph;
mod io;
mod scorecard;
mod types;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use aggregate::{
    ArcAsymmetry, DistrictAggregates, DistrictShape, SplitReduction, Splitting, SqrtEntropy,
    aggregate_shapes, asymmetric_arcs, border_length,
};

#[doc(inline)]
pub use compactness::{DiscreteCompactness, cut_edges, polsby_popper, reock};

#[doc(inline)]
pub use config::ScoreConfig;

#[doc(inline)]
pub use data::{Adjacency, Assignment, Metadata, Plan, Precinct, PrecinctTable, Shape, Shapes, StateInputs};

#[doc(inline)]
pub use error::{ScoreError, ScoreResult};

#[doc(inline)]
pub use graph::{Graph, GraphReport, asymmetric_neighbors};

#[doc(inline)]
pub use io::{read_adjacency, read_config, read_plan, read_precincts, read_shapes};

#[doc(inline)]
pub use scorecard::{PlanAnalysis, Scorecard, ScorecardDetails, analyze_plan, score_ensemble, score_plan, score_plan_with};

#[doc(inline)]
pub use types::{Demographic, DemographicCounts, DistrictId, GeoId, GeoLevel, OUT_OF_STATE};
