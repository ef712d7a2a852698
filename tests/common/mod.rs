#![allow(dead_code)]

use districtscore::{
    Adjacency, Assignment, DemographicCounts, GeoId, Metadata, OUT_OF_STATE, Plan, Precinct, PrecinctTable, Shape,
    Shapes, StateInputs,
};
use geo::Coord;

/// A rectangular grid of unit-square precincts.
///
/// Counties are vertical bands of columns, so any plan that cuts across rows
/// splits every county.
pub struct GridState {
    pub rows: usize,
    pub cols: usize,
    pub precincts: PrecinctTable,
    pub shapes: Shapes,
    pub adjacency: Adjacency,
}

impl GridState {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut precincts = PrecinctTable::default();
        let mut shapes = Shapes::default();
        let mut adjacency = Adjacency::default();

        for r in 0..rows {
            for c in 0..cols {
                let id = geoid(cols, r, c);
                let pop = 100 + ((r * cols + c) % 7) as i64;
                let (dem, rep) = (20 + (r % 3) as i64 * 5, 20 + (c % 4) as i64 * 5);
                precincts.insert(id.clone(), Precinct {
                    total_pop: pop,
                    demographics: DemographicCounts::new([80, 40, 10, 20, 1, 5, 1, 40]),
                    dem_votes: dem,
                    rep_votes: rep,
                });

                let mut neighbors = Vec::new();
                if r > 0 { neighbors.push(geoid(cols, r - 1, c)) }
                if r + 1 < rows { neighbors.push(geoid(cols, r + 1, c)) }
                if c > 0 { neighbors.push(geoid(cols, r, c - 1)) }
                if c + 1 < cols { neighbors.push(geoid(cols, r, c + 1)) }

                let mut arcs = neighbors.iter().map(|n| (n.clone(), 1.0)).collect::<ahash::AHashMap<_, _>>();
                let outer = [r == 0, c == 0, r + 1 == rows, c + 1 == cols].iter().filter(|&&b| b).count();
                if outer > 0 {
                    arcs.insert(GeoId::new(OUT_OF_STATE), outer as f64);
                    neighbors.push(GeoId::new(OUT_OF_STATE));
                }

                let (x, y) = (c as f64, r as f64);
                let exterior = vec![
                    Coord { x, y }, Coord { x: x + 1.0, y },
                    Coord { x: x + 1.0, y: y + 1.0 }, Coord { x, y: y + 1.0 },
                ];
                shapes.insert(id.clone(), Shape { area: 1.0, arcs, exterior });
                adjacency.insert(id, neighbors);
            }
        }

        Self { rows, cols, precincts, shapes, adjacency }
    }

    pub fn inputs(&self, districts: u32) -> StateInputs {
        let metadata = Metadata::from_precincts(&self.precincts, districts);
        StateInputs::new(self.precincts.clone(), self.shapes.clone(), &self.adjacency, metadata).unwrap()
    }

    /// Four rectangular districts: top-left 1, top-right 2, bottom-left 3, bottom-right 4.
    pub fn quadrant_plan(&self) -> Plan {
        self.plan(|r, c| 1 + (r >= self.rows / 2) as u32 * 2 + (c >= self.cols / 2) as u32)
    }

    pub fn plan(&self, district: impl Fn(usize, usize) -> u32) -> Plan {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .map(|(r, c)| Assignment::new(geoid(self.cols, r, c), district(r, c)))
            .collect()
    }
}

/// Eleven-character GEOID: state 34, county by column band, then row and column.
pub fn geoid(cols: usize, r: usize, c: usize) -> GeoId {
    let county = 1 + 2 * (c * 3 / cols);
    GeoId::new(&format!("34{county:03}{r:03}{c:03}"))
}
