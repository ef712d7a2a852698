use serde::Serialize;
use tracing::debug;

use crate::{
    data::Metadata,
    error::{ScoreError, ScoreResult},
    graph::Graph,
};

/// Number of undirected edges whose endpoints lie in different districts.
/// Each edge is counted once; state-border edges are not graph edges.
pub fn cut_edges(graph: &Graph, assignment: &[usize]) -> ScoreResult<usize> {
    graph.check_assignment(assignment)?;
    Ok(graph.undirected_edges()
        .filter(|&(u, v)| assignment[u] != assignment[v])
        .count())
}

/// Graph-based compactness of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscreteCompactness {
    pub cut_edges: usize,
    /// Natural log of the spanning tree count of each district's induced subgraph.
    pub spanning_tree_scores: Vec<f64>,
    /// Sum of the per-district scores (log of the product of counts).
    pub spanning_tree_score: f64,
}

impl DiscreteCompactness {
    /// Cut edges and spanning tree scores for a vertex-to-district assignment.
    ///
    /// Districts with more than `log_det_threshold` precincts are scored from
    /// the log-determinant. An empty or disconnected district is an error.
    pub fn compute(graph: &Graph, assignment: &[usize], metadata: &Metadata, log_det_threshold: usize) -> ScoreResult<Self> {
        let spanning_tree_scores = graph.split_by_district(assignment, metadata.num_districts())?
            .iter()
            .zip(metadata.districts())
            .map(|(subgraph, district)| {
                if subgraph.node_count() == 0 {
                    return Err(ScoreError::EmptyDistrict(district.clone()));
                }
                let score = subgraph.spanning_tree_score(log_det_threshold)
                    .ok_or_else(|| ScoreError::DisconnectedDistrict(district.clone()))?;
                debug!(%district, vertices = subgraph.node_count(), edges = subgraph.edge_count(), score,
                    "spanning tree score");
                Ok(score)
            })
            .collect::<ScoreResult<Vec<_>>>()?;

        Ok(Self {
            cut_edges: cut_edges(graph, assignment)?,
            spanning_tree_score: spanning_tree_scores.iter().sum(),
            spanning_tree_scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::Adjacency,
        graph::fixtures::grid,
        types::DistrictId,
    };

    fn quadrants(graph: &Graph) -> Vec<usize> {
        graph.ids().iter()
            .map(|id| {
                let row = id.as_str()[1..3].parse::<usize>().unwrap();
                let col = id.as_str()[4..6].parse::<usize>().unwrap();
                (row >= 5) as usize * 2 + (col >= 5) as usize
            })
            .collect()
    }

    fn four_districts() -> Metadata {
        Metadata::new((1..=4).map(DistrictId::Number), std::iter::empty())
    }

    #[test]
    fn four_quadrant_grid() {
        let graph = Graph::from_adjacency(&grid(10, 10)).unwrap();
        let assignment = quadrants(&graph);

        let discrete = DiscreteCompactness::compute(&graph, &assignment, &four_districts(), 32).unwrap();
        assert_eq!(discrete.cut_edges, 20);
        assert_eq!(discrete.spanning_tree_scores.len(), 4);
        assert!((discrete.spanning_tree_score - 80.56).abs() < 0.01);
        assert!((discrete.spanning_tree_score - 4.0 * 557_568_000f64.ln()).abs() < 1e-6);
    }

    #[test]
    fn threshold_does_not_change_scores() {
        let graph = Graph::from_adjacency(&grid(10, 10)).unwrap();
        let assignment = quadrants(&graph);
        let exact = DiscreteCompactness::compute(&graph, &assignment, &four_districts(), 1000).unwrap();
        let logdet = DiscreteCompactness::compute(&graph, &assignment, &four_districts(), 0).unwrap();
        for (a, b) in exact.spanning_tree_scores.iter().zip(&logdet.spanning_tree_scores) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn sentinel_does_not_affect_cut_edges() {
        let with_sentinel = grid(10, 10);
        let without = with_sentinel.iter()
            .map(|(id, neighbors)| (id.clone(), neighbors.iter().filter(|n| !n.is_out_of_state()).cloned().collect()))
            .collect::<Adjacency>();

        let a = Graph::from_adjacency(&with_sentinel).unwrap();
        let b = Graph::from_adjacency(&without).unwrap();
        assert_eq!(cut_edges(&a, &quadrants(&a)).unwrap(), cut_edges(&b, &quadrants(&b)).unwrap());
    }

    #[test]
    fn disconnected_district_is_reported() {
        let graph = Graph::from_adjacency(&grid(1, 3)).unwrap();
        // Ends of the row in district 1, middle in district 2.
        let err = DiscreteCompactness::compute(&graph, &[0, 1, 0], &Metadata::new([DistrictId::Number(1), DistrictId::Number(2)], std::iter::empty()), 32)
            .unwrap_err();
        assert_eq!(err, ScoreError::DisconnectedDistrict(DistrictId::Number(1)));
    }

    #[test]
    fn empty_district_is_reported() {
        let graph = Graph::from_adjacency(&grid(1, 2)).unwrap();
        let err = DiscreteCompactness::compute(&graph, &[0, 0], &Metadata::new([DistrictId::Number(1), DistrictId::Number(2)], std::iter::empty()), 32)
            .unwrap_err();
        assert_eq!(err, ScoreError::EmptyDistrict(DistrictId::Number(2)));
    }

    #[test]
    fn short_assignment_is_a_mismatch() {
        let graph = Graph::from_adjacency(&grid(2, 2)).unwrap();
        assert_eq!(cut_edges(&graph, &[0, 1]).unwrap_err(), ScoreError::VertexMismatch { plan: 2, graph: 4 });
    }
}
