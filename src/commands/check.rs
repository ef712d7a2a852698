use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;

use crate::{
    aggregate::{ArcAsymmetry, asymmetric_arcs},
    cli::CheckArgs,
    graph::{Graph, GraphReport},
    io::{read_adjacency, read_shapes},
    types::GeoId,
};

#[derive(Serialize)]
struct CheckReport {
    graph: GraphReport,
    asymmetric_arcs: Vec<ArcAsymmetry>,
    /// Graph vertices with no shape record.
    missing_shapes: Vec<GeoId>,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let shapes = read_shapes(&args.shapes)?;
    let adjacency = read_adjacency(&args.graph)?;

    let graph = Graph::validate(&adjacency)?;
    let asymmetric_arcs = asymmetric_arcs(&shapes, args.tolerance);
    let mut missing_shapes = adjacency.keys()
        .filter(|id| !id.is_out_of_state() && !shapes.contains_key(*id))
        .cloned()
        .collect::<Vec<_>>();
    missing_shapes.sort();

    let report = CheckReport { graph, asymmetric_arcs, missing_shapes };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.graph.is_valid() || !report.asymmetric_arcs.is_empty() || !report.missing_shapes.is_empty() {
        bail!(
            "[check] {} one-way neighbor pairs, {} asymmetric arcs, {} precincts without shapes, connected: {}",
            report.graph.asymmetric.len(),
            report.asymmetric_arcs.len(),
            report.missing_shapes.len(),
            report.graph.connected,
        );
    }
    info!(vertices = report.graph.vertices, edges = report.graph.edges, "inputs are consistent");
    Ok(())
}
