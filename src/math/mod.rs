mod color;
mod curve;
mod gradient;

pub use color::{hsv_to_rgb, Color};
pub use curve::{AnimationCurve, CurveRange, Keyframe, WrapMode, LINE_RANGE_RATIO};
pub use gradient::{AlphaKey, BlendMode, ColorKey, Gradient, GradientRange};
