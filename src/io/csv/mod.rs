//! CSV reading for precinct tables and plans.

mod read;

pub use read::{read_plan, read_precincts};
