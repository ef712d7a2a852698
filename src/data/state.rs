use crate::{
    aggregate::{ArcAsymmetry, asymmetric_arcs},
    data::{Adjacency, Metadata, PrecinctTable, Shapes},
    error::ScoreResult,
    graph::Graph,
};

/// Everything about a state that does not depend on the plan being scored.
///
/// Built once and shared read-only by every scoring call, including calls
/// running in parallel over an ensemble.
#[derive(Debug, Clone)]
pub struct StateInputs {
    pub precincts: PrecinctTable,
    pub shapes: Shapes,
    pub graph: Graph,
    pub metadata: Metadata,
}

impl StateInputs {
    /// Assemble state inputs, building the precinct graph from raw adjacency lists.
    pub fn new(precincts: PrecinctTable, shapes: Shapes, adjacency: &Adjacency, metadata: Metadata) -> ScoreResult<Self> {
        let graph = Graph::from_adjacency(adjacency)?;
        Ok(Self { precincts, shapes, graph, metadata })
    }

    /// Neighbor pairs whose recorded arc lengths differ by more than `tolerance`.
    /// Each pair is logged as a warning; scoring is unaffected.
    pub fn check_arcs(&self, tolerance: f64) -> Vec<ArcAsymmetry> {
        asymmetric_arcs(&self.shapes, tolerance)
    }
}
