pub mod cli;
pub mod core;
pub mod error;
pub mod math;
pub mod path;
pub mod traits;

pub use crate::core::{RibbonMesh, Sample, TrailComponent, TrailConfig, TrailSampler, UpdateResult};
pub use error::TrailError;
