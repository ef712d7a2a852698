use ahash::{AHashMap, AHashSet};

use crate::{error::{ScoreError, ScoreResult}, types::{DistrictId, GeoId}};

/// One precinct's district in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub geoid: GeoId,
    pub district: DistrictId,
}

impl Assignment {
    pub fn new(geoid: impl Into<GeoId>, district: impl Into<DistrictId>) -> Self {
        Self { geoid: geoid.into(), district: district.into() }
    }
}

/// A districting plan: an ordered list of precinct assignments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    assignments: Vec<Assignment>,
}

impl Plan {
    pub fn new(assignments: Vec<Assignment>) -> Self { Self { assignments } }

    #[inline] pub fn assignments(&self) -> &[Assignment] { &self.assignments }

    #[inline] pub fn len(&self) -> usize { self.assignments.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.assignments.is_empty() }

    /// Lookup from precinct to its district.
    /// Fails if the plan is empty or assigns a precinct twice.
    pub fn district_by_geoid(&self) -> ScoreResult<AHashMap<&GeoId, &DistrictId>> {
        if self.is_empty() { return Err(ScoreError::EmptyPlan) }

        let mut lookup = AHashMap::with_capacity(self.len());
        for a in &self.assignments {
            if lookup.insert(&a.geoid, &a.district).is_some() {
                return Err(ScoreError::DuplicateAssignment { geoid: a.geoid.clone() });
            }
        }
        Ok(lookup)
    }

    /// Distinct district labels, sorted.
    pub fn districts(&self) -> Vec<DistrictId> {
        let mut districts = self.assignments.iter()
            .map(|a| &a.district)
            .collect::<AHashSet<_>>()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        districts.sort();
        districts
    }
}

impl FromIterator<Assignment> for Plan {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
