//! JSON inputs: shapes, adjacency graphs and scoring configuration.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::{
    config::ScoreConfig,
    data::{Adjacency, Shapes},
};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open {what} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse {what} from {:?}", path))
}

/// Read per-precinct shapes: `{ geoid: { area, arcs, exterior } }`.
pub fn read_shapes(path: &Path) -> Result<Shapes> {
    read_json(path, "shapes")
}

/// Read adjacency lists: `{ geoid: [neighbor, ...] }`.
pub fn read_adjacency(path: &Path) -> Result<Adjacency> {
    read_json(path, "graph")
}

/// Read a scoring configuration. Missing keys take their defaults.
pub fn read_config(path: &Path) -> Result<ScoreConfig> {
    read_json(path, "config")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_adjacency_with_sentinel() {
        let file = json_file(r#"{ "A": ["B", "OUT_OF_STATE"], "B": ["A"] }"#);
        let adjacency = read_adjacency(file.path()).unwrap();
        assert_eq!(adjacency.len(), 2);
        assert!(adjacency["A"][1].is_out_of_state());
    }

    #[test]
    fn reads_shapes() {
        let file = json_file(r#"{ "A": { "area": 1.5, "arcs": { "B": 2.0 }, "exterior": [[0.0, 1.0]] } }"#);
        let shapes = read_shapes(file.path()).unwrap();
        assert_eq!(shapes["A"].arcs["B"], 2.0);
        assert_eq!(shapes["A"].exterior.len(), 1);
    }

    #[test]
    fn reads_partial_config() {
        let file = json_file(r#"{ "log_det_threshold": 10 }"#);
        let config = read_config(file.path()).unwrap();
        assert_eq!(config.log_det_threshold, 10);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let file = json_file("{ not json");
        let err = read_shapes(file.path()).unwrap_err();
        assert!(err.to_string().contains("shapes"));
    }
}
