use ahash::AHashMap;
use geo::Coord;
use serde::{Deserialize, Deserializer};

use crate::types::GeoId;

/// Preprocessed shape summary of one precinct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Shape {
    pub area: f64,

    /// Shared border length with each neighbor, possibly including the out-of-state sentinel.
    #[serde(default)]
    pub arcs: AHashMap<GeoId, f64>,

    /// Exterior boundary points, stored as `[x, y]` pairs.
    #[serde(default, deserialize_with = "deserialize_coords")]
    pub exterior: Vec<Coord<f64>>,
}

fn deserialize_coords<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Coord<f64>>, D::Error> {
    Ok(Vec::<(f64, f64)>::deserialize(deserializer)?
        .into_iter()
        .map(|(x, y)| Coord { x, y })
        .collect())
}

/// Precinct shapes keyed by GEOID.
pub type Shapes = AHashMap<GeoId, Shape>;

/// Raw precinct adjacency lists keyed by GEOID, as stored on disk.
pub type Adjacency = AHashMap<GeoId, Vec<GeoId>>;
