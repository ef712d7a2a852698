mod demographic;
mod district_id;
mod geo_id;
mod geo_level;

pub use demographic::{Demographic, DemographicCounts};
pub use district_id::DistrictId;
pub use geo_id::{GeoId, OUT_OF_STATE};
pub use geo_level::GeoLevel;
