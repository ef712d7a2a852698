//! File loaders, organized by format.
//!
//! - `csv` - precinct attribute tables and plan assignments
//! - `json` - shapes, adjacency graphs and configuration

mod csv;
mod json;

pub use csv::{read_plan, read_precincts};
pub use json::{read_adjacency, read_config, read_shapes};
