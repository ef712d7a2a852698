mod discrete;
mod geometric;

pub use discrete::{DiscreteCompactness, cut_edges};
pub use geometric::{polsby_popper, reock};
