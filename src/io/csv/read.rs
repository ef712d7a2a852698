//! CSV reading operations.

use std::{fs::File, path::Path, str::FromStr};

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReadOptions}};

use crate::{
    data::{Assignment, Plan, Precinct, PrecinctTable},
    types::{Demographic, DemographicCounts, DistrictId, GeoId},
};

const GEOID_COLUMNS: [&str; 2] = ["GEOID", "GEOID20"];
const DISTRICT_COLUMNS: [&str; 2] = ["DISTRICT", "District"];

/// Reads a CSV file from `path` with every column as a string, so ids keep their leading zeros.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// First column of `df` named in `candidates`.
fn pick_column<'a>(df: &'a DataFrame, candidates: &[&str]) -> Result<&'a Column> {
    candidates.iter()
        .find_map(|name| df.column(name).ok())
        .ok_or_else(|| anyhow!("[io::csv::read] CSV has none of the columns {:?}", candidates))
}

/// String values of a column, with nulls read as empty strings.
fn strings(column: &Column) -> Result<Vec<&str>> {
    Ok(column.as_materialized_series().str()?.into_iter().map(|v| v.unwrap_or("")).collect())
}

/// Parse a count cell. Blank cells are zero; decimal cells are rounded.
fn parse_count(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() { return Some(0) }
    value.parse::<i64>().ok()
        .or_else(|| value.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i64))
}

/// Integer values of a named column.
fn counts(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] CSV is missing column {name}"))?;
    strings(column)?.into_iter().enumerate()
        .map(|(row, value)| parse_count(value)
            .ok_or_else(|| anyhow!("[io::csv::read] Row {}: invalid {} value {:?}", row + 1, name, value)))
        .collect()
}

/// Read a precinct attribute table keyed by `GEOID` (or `GEOID20`).
///
/// Requires total population, the voting-age fields and the two-party vote fields.
/// Other election columns are ignored.
pub fn read_precincts(path: &Path) -> Result<PrecinctTable> {
    let df = read_csv(path)?;
    let geoids = strings(pick_column(&df, &GEOID_COLUMNS)?)?;

    let total_pop = counts(&df, "TOTAL_POP")?;
    let demographics = Demographic::ALL.iter()
        .map(|demo| counts(&df, demo.field()))
        .collect::<Result<Vec<_>>>()?;
    let rep_votes = counts(&df, "REP_VOTES")?;
    let dem_votes = counts(&df, "DEM_VOTES")?;

    let mut precincts = PrecinctTable::with_capacity(geoids.len());
    for (row, geoid) in geoids.iter().enumerate() {
        ensure!(!geoid.trim().is_empty(), "[io::csv::read] Row {}: empty GEOID in {}", row + 1, path.display());
        let precinct = Precinct {
            total_pop: total_pop[row],
            demographics: DemographicCounts::new(std::array::from_fn(|d| demographics[d][row])),
            rep_votes: rep_votes[row],
            dem_votes: dem_votes[row],
        };
        let previous = precincts.insert(GeoId::new(geoid.trim()), precinct);
        ensure!(previous.is_none(), "[io::csv::read] Duplicate GEOID {} in {}", geoid, path.display());
    }
    Ok(precincts)
}

/// Read a plan from a CSV with a GEOID column and a district column.
/// Numeric district labels become numbers, anything else is kept as a label.
pub fn read_plan(path: &Path) -> Result<Plan> {
    let df = read_csv(path)?;
    let geoids = strings(pick_column(&df, &GEOID_COLUMNS)?)?;
    let districts = strings(pick_column(&df, &DISTRICT_COLUMNS)?)?;

    geoids.into_iter().zip(districts).enumerate()
        .map(|(row, (geoid, district))| {
            ensure!(!geoid.trim().is_empty() && !district.trim().is_empty(),
                "[io::csv::read] Row {}: missing GEOID or district in {}", row + 1, path.display());
            let Ok(district) = DistrictId::from_str(district);
            Ok(Assignment::new(geoid.trim(), district))
        })
        .collect()
}
