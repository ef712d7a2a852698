use ahash::AHashSet;
use geo::Coord;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    data::{Plan, Shape, Shapes},
    error::{ScoreError, ScoreResult},
    graph::Graph,
    types::{GeoId, OUT_OF_STATE},
};

/// Area, perimeter and enclosing-circle diameter of one district.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DistrictShape {
    pub area: f64,
    pub perimeter: f64,
    pub diameter: f64,
}

impl DistrictShape {
    /// Radius of the minimum enclosing circle.
    #[inline] pub fn radius(&self) -> f64 { self.diameter / 2.0 }
}

fn shape<'a>(shapes: &'a Shapes, geoid: &GeoId) -> ScoreResult<&'a Shape> {
    shapes.get(geoid).ok_or_else(|| ScoreError::MissingPrecinct { geoid: geoid.clone(), table: "shapes" })
}

/// Length of a vertex's border with other districts and with the state boundary.
///
/// Arcs to neighbors in the same district are interior and skipped. An arc
/// missing on this side falls back to the length the neighbor records.
pub fn border_length(graph: &Graph, shapes: &Shapes, assignment: &[usize], node: usize) -> ScoreResult<f64> {
    let geoid = graph.id(node);
    let own = shape(shapes, geoid)?;

    let mut length = 0.0;
    if graph.on_border(node) {
        length += own.arcs.get(OUT_OF_STATE).copied().unwrap_or(0.0);
    }
    for neighbor in graph.edges(node).filter(|&v| assignment[v] != assignment[node]) {
        let other = graph.id(neighbor);
        let arc = match own.arcs.get(other) {
            Some(&arc) => arc,
            None => shape(shapes, other)?.arcs.get(geoid).copied()
                .ok_or_else(|| ScoreError::MissingArc { from: geoid.clone(), to: other.clone() })?,
        };
        length += arc;
    }
    Ok(length)
}

/// Per-district area, perimeter and diameter.
///
/// Boundary points are pooled per district in plan order with exact duplicates
/// removed, then passed to the minimum enclosing circle solver, which draws its
/// shuffle from `rng`. Districts without points get a zero diameter.
pub fn aggregate_shapes<R: Rng + ?Sized>(
    plan: &Plan,
    assignment: &[usize],
    num_districts: usize,
    graph: &Graph,
    shapes: &Shapes,
    rng: &mut R,
) -> ScoreResult<Vec<DistrictShape>> {
    let mut districts = vec![DistrictShape::default(); num_districts];
    let mut points = vec![Vec::<Coord<f64>>::new(); num_districts];
    let mut seen = vec![AHashSet::<(u64, u64)>::new(); num_districts];

    for a in plan.assignments() {
        let node = graph.node(a.geoid.as_str())
            .ok_or_else(|| ScoreError::MissingPrecinct { geoid: a.geoid.clone(), table: "graph" })?;
        let i = assignment[node];
        let precinct = shape(shapes, &a.geoid)?;

        districts[i].area += precinct.area;
        districts[i].perimeter += border_length(graph, shapes, assignment, node)?;
        for &point in &precinct.exterior {
            if seen[i].insert((point.x.to_bits(), point.y.to_bits())) {
                points[i].push(point);
            }
        }
    }

    for (i, (district, cloud)) in districts.iter_mut().zip(&points).enumerate() {
        district.diameter = mincircle::minimum_enclosing_circle(cloud, rng)
            .map_or(0.0, |circle| circle.diameter());
        debug!(district = i, points = cloud.len(), area = district.area, perimeter = district.perimeter,
            diameter = district.diameter, "aggregated district shape");
    }

    Ok(districts)
}

/// A shared border whose two sides record different lengths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcAsymmetry {
    pub from: GeoId,
    pub to: GeoId,
    pub forward: f64,
    /// Length recorded by `to`, if it records one at all.
    pub backward: Option<f64>,
}

/// Find neighbor pairs whose arc lengths differ by more than `tolerance`.
///
/// Each mismatched pair is reported once and logged; scoring is not affected.
pub fn asymmetric_arcs(shapes: &Shapes, tolerance: f64) -> Vec<ArcAsymmetry> {
    let mut found = Vec::new();
    let mut total = 0usize;

    for (from, shape) in shapes.iter() {
        for (to, &forward) in shape.arcs.iter().filter(|(to, _)| !to.is_out_of_state()) {
            total += 1;
            let backward = shapes.get(to).and_then(|s| s.arcs.get(from)).copied();
            let symmetric = backward.is_some_and(|b| (forward - b).abs() <= tolerance);
            if !symmetric && (backward.is_none() || from < to) {
                warn!(%from, %to, forward, ?backward, "arcs are not symmetric");
                found.push(ArcAsymmetry { from: from.clone(), to: to.clone(), forward, backward });
            }
        }
    }

    if !found.is_empty() {
        warn!(arcs = total, asymmetric = found.len(), "shape arcs are not symmetric");
    }
    found.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
    found
}
