mod data;
mod shapes;
mod splitting;

pub use data::DistrictAggregates;
pub use shapes::{ArcAsymmetry, DistrictShape, aggregate_shapes, asymmetric_arcs, border_length};
pub use splitting::{SplitReduction, Splitting, SqrtEntropy};
