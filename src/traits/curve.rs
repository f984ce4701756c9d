use crate::math::Color;

/// Scalar evaluated along the trail, `t` in [0, 1] with 0 at the head
pub trait ScalarCurve {
    fn evaluate(&self, t: f32) -> f32;
}

/// Color evaluated along the trail, `t` in [0, 1] with 0 at the head
pub trait ColorCurve {
    fn evaluate(&self, t: f32) -> Color;
}

impl<F: Fn(f32) -> f32> ScalarCurve for F {
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

impl ColorCurve for Color {
    fn evaluate(&self, _t: f32) -> Color {
        *self
    }
}
