pub mod check;
pub mod score;
