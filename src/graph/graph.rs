use std::collections::{BTreeSet, VecDeque};

use ahash::AHashMap;
use serde::Serialize;

use crate::{
    data::Adjacency,
    error::{ScoreError, ScoreResult},
    types::GeoId,
};

/// An undirected precinct graph in compressed sparse row format.
///
/// Vertices are the precincts sorted by GEOID. The out-of-state sentinel is
/// not a vertex; precincts listing it as a neighbor are flagged as lying on the
/// state border instead.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    ids: Vec<GeoId>,
    index: AHashMap<GeoId, usize>,
    offsets: Vec<u32>,
    edges: Vec<u32>,
    border: Vec<bool>,
}

impl Graph {
    /// Construct a graph from vertex ids, symmetric adjacency lists and border flags.
    pub(crate) fn new(ids: Vec<GeoId>, edges: &[Vec<u32>], border: Vec<bool>) -> Self {
        assert!(edges.len() == ids.len(), "edges.len() must equal number of vertices");
        assert!(border.len() == ids.len(), "border.len() must equal number of vertices");

        Self {
            index: ids.iter().cloned().enumerate().map(|(i, id)| (id, i)).collect(),
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
            ids,
            border,
        }
    }

    /// Build the graph from raw adjacency lists.
    ///
    /// Edges listed in only one direction are added in both, self-loops are
    /// dropped, and the sentinel only sets the border flag of the listing precinct.
    pub fn from_adjacency(adjacency: &Adjacency) -> ScoreResult<Self> {
        let mut ids = adjacency.keys()
            .filter(|id| !id.is_out_of_state())
            .cloned()
            .collect::<Vec<_>>();
        ids.sort();
        let index = ids.iter().enumerate().map(|(i, id)| (id, i as u32)).collect::<AHashMap<_, _>>();

        let mut border = vec![false; ids.len()];
        let mut pairs = BTreeSet::new();
        for (u, id) in ids.iter().enumerate() {
            for neighbor in adjacency.get(id).into_iter().flatten() {
                if neighbor.is_out_of_state() {
                    border[u] = true;
                    continue;
                }
                let &v = index.get(neighbor)
                    .ok_or_else(|| ScoreError::MissingVertex { from: id.clone(), to: neighbor.clone() })?;
                let u = u as u32;
                if u != v { pairs.insert((u.min(v), u.max(v))); }
            }
        }

        let mut edges = vec![Vec::new(); ids.len()];
        for &(u, v) in &pairs {
            edges[u as usize].push(v);
            edges[v as usize].push(u);
        }
        edges.iter_mut().for_each(|list| list.sort_unstable());

        Ok(Self::new(ids, &edges, border))
    }

    /// Get the number of vertices in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.ids.len() }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() / 2 }

    /// Get the GEOID of a vertex.
    #[inline] pub fn id(&self, node: usize) -> &GeoId { &self.ids[node] }

    /// Get the GEOIDs of all vertices, in vertex order.
    #[inline] pub fn ids(&self) -> &[GeoId] { &self.ids }

    /// Look up the vertex of a GEOID.
    #[inline] pub fn node(&self, id: &str) -> Option<usize> { self.index.get(id).copied() }

    /// Whether a vertex touches the out-of-state sentinel.
    #[inline] pub fn on_border(&self, node: usize) -> bool { self.border[node] }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Iterate each undirected edge once, as `(u, v)` with `u < v`.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.node_count()).flat_map(move |u| self.edges(u).filter(move |&v| u < v).map(move |v| (u, v)))
    }

    /// Whether every vertex can reach every other vertex. An empty graph is not connected.
    pub fn is_connected(&self) -> bool {
        if self.node_count() == 0 { return false }

        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(u) = queue.pop_front() {
            for v in self.edges(u) {
                if !seen[v] {
                    seen[v] = true;
                    reached += 1;
                    queue.push_back(v);
                }
            }
        }
        reached == self.node_count()
    }

    /// Subgraph induced by `nodes`: only edges with both endpoints in the set are kept.
    /// Vertices of the result are ordered by GEOID.
    pub fn induced_subgraph(&self, nodes: &[usize]) -> Graph {
        let mut nodes = nodes.to_vec();
        nodes.sort_unstable();
        nodes.dedup();

        let local = nodes.iter().enumerate().map(|(i, &u)| (u, i as u32)).collect::<AHashMap<_, _>>();
        let edges = nodes.iter()
            .map(|&u| self.edges(u).filter_map(|v| local.get(&v).copied()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        Graph::new(
            nodes.iter().map(|&u| self.ids[u].clone()).collect(),
            &edges,
            nodes.iter().map(|&u| self.border[u]).collect(),
        )
    }
}

/// Precinct pairs whose adjacency is recorded in only one direction.
/// The sentinel is exempt since it has no adjacency list of its own.
pub fn asymmetric_neighbors(adjacency: &Adjacency) -> Vec<(GeoId, GeoId)> {
    let mut missing = adjacency.iter()
        .filter(|(id, _)| !id.is_out_of_state())
        .flat_map(|(id, neighbors)| {
            neighbors.iter()
                .filter(|n| !n.is_out_of_state())
                .filter(move |n| !adjacency.get(*n).is_some_and(|back| back.contains(id)))
                .map(move |n| (id.clone(), n.clone()))
        })
        .collect::<Vec<_>>();
    missing.sort();
    missing
}

/// Summary of an adjacency graph's structural checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    pub vertices: usize,
    pub edges: usize,
    pub border_vertices: usize,
    pub asymmetric: Vec<(GeoId, GeoId)>,
    pub connected: bool,
}

impl GraphReport {
    /// Symmetric and connected.
    #[inline] pub fn is_valid(&self) -> bool { self.asymmetric.is_empty() && self.connected }
}

impl Graph {
    /// Check raw adjacency lists for one-way neighbor entries and build the
    /// graph to test that the state is a single connected component.
    pub fn validate(adjacency: &Adjacency) -> ScoreResult<GraphReport> {
        let asymmetric = asymmetric_neighbors(adjacency);
        let graph = Self::from_adjacency(adjacency)?;
        Ok(GraphReport {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
            border_vertices: graph.border.iter().filter(|&&b| b).count(),
            asymmetric,
            connected: graph.is_connected(),
        })
    }
}
