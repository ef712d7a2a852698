mod graph;
mod laplacian;
mod split;

pub use graph::{Graph, GraphReport, asymmetric_neighbors};

#[cfg(test)]
pub(crate) use graph::tests as fixtures;
