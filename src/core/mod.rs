pub mod config;
pub mod frame;
pub mod ribbon;
pub mod sampler;
pub mod trail;

pub use config::{TrailConfig, DEFAULT_CAPACITY, DEFAULT_LIFETIME, DEFAULT_MIN_DISTANCE, MIN_DISTANCE_EPSILON};
pub use frame::{FrameClock, FrameInfo};
pub use ribbon::{RibbonMesh, RibbonVertex};
pub use sampler::{normalized_position, Sample, TrailSampler, UpdateResult};
pub use trail::TrailComponent;
