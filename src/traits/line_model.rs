use super::curve::{ColorCurve, ScalarCurve};
use crate::core::sampler::Sample;

/// Line geometry model - turns a sample sequence plus curves into vertex data
pub trait LineModel {
    /// Maximum number of points the model will build geometry for
    fn set_capacity(&mut self, capacity: usize);

    /// Rebuild geometry from samples ordered newest-first
    fn rebuild(&mut self, samples: &[Sample], width: &dyn ScalarCurve, color: &dyn ColorCurve);

    /// Drop all geometry
    fn clear(&mut self);
}

/// Creates line models for trail components
pub trait LineModelFactory {
    type Model: LineModel;

    fn create_model(&mut self) -> Self::Model;
}

impl<M: LineModel, F: FnMut() -> M> LineModelFactory for F {
    type Model = M;

    fn create_model(&mut self) -> M {
        self()
    }
}
