use std::ops::{AddAssign, Index, IndexMut};

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Voting-age population fields tracked per precinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demographic {
    Vap,
    White,
    Hispanic,
    Black,
    Native,
    Asian,
    Pacific,
    Minority,
}

impl Demographic {
    pub const ALL: [Demographic; 8] = [
        Demographic::Vap,
        Demographic::White,
        Demographic::Hispanic,
        Demographic::Black,
        Demographic::Native,
        Demographic::Asian,
        Demographic::Pacific,
        Demographic::Minority,
    ];

    /// Column name in the precinct table.
    pub fn field(&self) -> &'static str {
        match self {
            Demographic::Vap => "TOTAL_VAP",
            Demographic::White => "WHITE_VAP",
            Demographic::Hispanic => "HISPANIC_VAP",
            Demographic::Black => "BLACK_VAP",
            Demographic::Native => "NATIVE_VAP",
            Demographic::Asian => "ASIAN_VAP",
            Demographic::Pacific => "PACIFIC_VAP",
            Demographic::Minority => "MINORITY_VAP",
        }
    }

    /// Short lowercase name used in output.
    pub fn short_name(&self) -> &'static str {
        match self {
            Demographic::Vap => "vap",
            Demographic::White => "white",
            Demographic::Hispanic => "hispanic",
            Demographic::Black => "black",
            Demographic::Native => "native",
            Demographic::Asian => "asian",
            Demographic::Pacific => "pacific",
            Demographic::Minority => "minority",
        }
    }

    #[inline] fn index(self) -> usize { self as usize }
}

/// One count per [`Demographic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemographicCounts([i64; 8]);

impl DemographicCounts {
    pub fn new(counts: [i64; 8]) -> Self { Self(counts) }

    /// Iterate (demographic, count) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Demographic, i64)> + '_ {
        Demographic::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Share of voting-age population for each subgroup (VAP itself excluded).
    /// Returns `None` when VAP is zero.
    pub fn vap_shares(&self) -> Option<Vec<(Demographic, f64)>> {
        let vap = self[Demographic::Vap];
        (vap != 0).then(|| {
            self.iter()
                .skip(1)
                .map(|(demo, count)| (demo, count as f64 / vap as f64))
                .collect()
        })
    }
}

impl Index<Demographic> for DemographicCounts {
    type Output = i64;
    fn index(&self, demo: Demographic) -> &i64 { &self.0[demo.index()] }
}

impl IndexMut<Demographic> for DemographicCounts {
    fn index_mut(&mut self, demo: Demographic) -> &mut i64 { &mut self.0[demo.index()] }
}

impl AddAssign<&DemographicCounts> for DemographicCounts {
    fn add_assign(&mut self, other: &DemographicCounts) {
        self.0.iter_mut().zip(other.0.iter()).for_each(|(a, b)| *a += b);
    }
}

impl Serialize for DemographicCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (demo, count) in self.iter() {
            map.serialize_entry(demo.short_name(), &count)?;
        }
        map.end()
    }
}
