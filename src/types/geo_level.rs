/// Levels of the census geographic hierarchy encoded in a GEOID prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoLevel {
    State,      // Highest-level entity
    County,     // County -> State
}

impl GeoLevel {
    /// Number of leading GEOID characters identifying an entity at this level.
    pub fn prefix_len(&self) -> usize {
        match self {
            GeoLevel::State  => 2,
            GeoLevel::County => 5,
        }
    }
}
