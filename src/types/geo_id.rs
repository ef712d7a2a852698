use std::{borrow::Borrow, fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::geo_level::GeoLevel;

/// Reserved id of the synthetic node standing for the state's exterior boundary.
pub const OUT_OF_STATE: &str = "OUT_OF_STATE";

/// Precinct identifier.
/// Keeps the GEOID text (with leading zeros) but avoids repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoId(Arc<str>);

impl GeoId {
    pub fn new(id: &str) -> Self { Self(Arc::from(id)) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }

    /// Whether this is the out-of-state sentinel.
    #[inline] pub fn is_out_of_state(&self) -> bool { &*self.0 == OUT_OF_STATE }

    /// The GEOID prefix identifying the enclosing entity at `level`.
    /// If the id is shorter than expected, the full id is returned.
    pub fn prefix(&self, level: GeoLevel) -> &str {
        self.0.get(..level.prefix_len()).unwrap_or(self.as_str())
    }

    /// County FIPS code: the county prefix with the state digits stripped.
    pub fn county_fips(&self) -> &str {
        let county = self.prefix(GeoLevel::County);
        county.get(GeoLevel::State.prefix_len()..).unwrap_or("")
    }
}

impl From<&str> for GeoId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for GeoId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl Borrow<str> for GeoId {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl Serialize for GeoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GeoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(GeoId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_follow_census_hierarchy() {
        let id = GeoId::new("370010201001000");
        assert_eq!(id.prefix(GeoLevel::State), "37");
        assert_eq!(id.prefix(GeoLevel::County), "37001");
        assert_eq!(id.county_fips(), "001");
    }

    #[test]
    fn short_ids_do_not_panic() {
        assert_eq!(GeoId::new("3").county_fips(), "");
        assert_eq!(GeoId::new("3700").county_fips(), "00");
        assert_eq!(GeoId::new("3700").prefix(GeoLevel::County), "3700");
    }

    #[test]
    fn sentinel_is_recognized() {
        assert!(GeoId::new(OUT_OF_STATE).is_out_of_state());
        assert!(!GeoId::new("37001").is_out_of_state());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let id: GeoId = serde_json::from_str("\"340010001001\"").unwrap();
        assert_eq!(id.as_str(), "340010001001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"340010001001\"");
    }
}
