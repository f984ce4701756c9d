pub mod curve;
pub mod line_model;

pub use curve::*;
pub use line_model::*;
