mod metadata;
mod plan;
mod precinct;
mod shapes;
mod state;

pub use metadata::Metadata;
pub use plan::{Assignment, Plan};
pub use precinct::{Precinct, PrecinctTable};
pub use shapes::{Adjacency, Shape, Shapes};
pub use state::StateInputs;
