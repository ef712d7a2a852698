use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// District label from a plan file: usually a number, occasionally free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictId {
    Number(u32),
    Label(String),
}

impl FromStr for DistrictId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<u32>().map_or_else(|_| DistrictId::Label(s.to_string()), DistrictId::Number))
    }
}

impl From<u32> for DistrictId {
    fn from(n: u32) -> Self { DistrictId::Number(n) }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistrictId::Number(n) => write!(f, "{n}"),
            DistrictId::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_labels() {
        assert_eq!("7".parse::<DistrictId>(), Ok(DistrictId::Number(7)));
        assert_eq!(" 12 ".parse::<DistrictId>(), Ok(DistrictId::Number(12)));
        assert_eq!("AL".parse::<DistrictId>(), Ok(DistrictId::Label("AL".into())));
    }

    #[test]
    fn numbers_sort_before_labels() {
        let mut ids = vec![DistrictId::Label("A".into()), DistrictId::Number(10), DistrictId::Number(2)];
        ids.sort();
        assert_eq!(ids, vec![DistrictId::Number(2), DistrictId::Number(10), DistrictId::Label("A".into())]);
    }

    #[test]
    fn serde_is_untagged() {
        assert_eq!(serde_json::from_str::<DistrictId>("3").unwrap(), DistrictId::Number(3));
        assert_eq!(serde_json::from_str::<DistrictId>("\"3A\"").unwrap(), DistrictId::Label("3A".into()));
        assert_eq!(serde_json::to_string(&DistrictId::Number(4)).unwrap(), "4");
    }
}
