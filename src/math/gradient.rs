use super::color::Color;
use super::curve::{validate_key_times, LINE_RANGE_RATIO};
use crate::error::Result;
use crate::traits::ColorCurve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Interpolate between neighbouring keys
    #[default]
    Blend,
    /// Hold each key's value until the next key
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorKey {
    pub color: Color,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaKey {
    pub alpha: f32,
    pub time: f32,
}

/// Color keys drive RGB, alpha keys drive opacity
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>,
    pub mode: BlendMode,
}

impl Gradient {
    pub fn new(color_keys: Vec<ColorKey>, alpha_keys: Vec<AlphaKey>, mode: BlendMode) -> Result<Self> {
        validate_key_times("gradient color", color_keys.iter().map(|k| k.time))?;
        validate_key_times("gradient alpha", alpha_keys.iter().map(|k| k.time))?;
        Ok(Self {
            color_keys,
            alpha_keys,
            mode,
        })
    }

    /// Two-key fade from `head` to `tail` over [0, 1]
    pub fn fade(head: Color, tail: Color) -> Self {
        Self {
            color_keys: vec![
                ColorKey { color: head, time: 0.0 },
                ColorKey { color: tail, time: 1.0 },
            ],
            alpha_keys: vec![
                AlphaKey { alpha: head.a, time: 0.0 },
                AlphaKey { alpha: tail.a, time: 1.0 },
            ],
            mode: BlendMode::Blend,
        }
    }

    pub fn evaluate(&self, t: f32) -> Color {
        let rgb = sample_keys(&self.color_keys, t, self.mode, |k| k.time, |k| k.color, Color::lerp);
        let alpha = sample_keys(&self.alpha_keys, t, self.mode, |k| k.time, |k| k.alpha, |a: f32, b: f32, f: f32| {
            a + (b - a) * f
        });
        rgb.with_alpha(alpha)
    }
}

fn sample_keys<K, V: Copy>(
    keys: &[K],
    t: f32,
    mode: BlendMode,
    time: impl Fn(&K) -> f32,
    value: impl Fn(&K) -> V,
    lerp: impl Fn(V, V, f32) -> V,
) -> V {
    let idx = keys.partition_point(|k| time(k) <= t);
    if idx == 0 {
        return value(&keys[0]);
    }
    if idx == keys.len() {
        return value(&keys[keys.len() - 1]);
    }

    let a = &keys[idx - 1];
    let b = &keys[idx];
    match mode {
        BlendMode::Fixed => value(a),
        BlendMode::Blend => {
            let dt = time(b) - time(a);
            if dt <= 0.0 {
                value(b)
            } else {
                lerp(value(a), value(b), (t - time(a)) / dt)
            }
        }
    }
}

/// Color over the trail's length
#[derive(Debug, Clone, PartialEq)]
pub enum GradientRange {
    Color(Color),
    Gradient(Gradient),
    /// Color picked between `min` and `max` by the range ratio
    TwoColors { min: Color, max: Color },
    /// Gradient color picked between `min` and `max` by the range ratio
    TwoGradients { min: Gradient, max: Gradient },
}

impl GradientRange {
    /// Color at `t` with `ratio` in [0, 1] selecting between two-value ends
    pub fn evaluate_with_ratio(&self, t: f32, ratio: f32) -> Color {
        match self {
            GradientRange::Color(c) => *c,
            GradientRange::Gradient(g) => g.evaluate(t),
            GradientRange::TwoColors { min, max } => min.lerp(*max, ratio),
            GradientRange::TwoGradients { min, max } => min.evaluate(t).lerp(max.evaluate(t), ratio),
        }
    }
}

impl Default for GradientRange {
    fn default() -> Self {
        GradientRange::Color(Color::WHITE)
    }
}

impl ColorCurve for GradientRange {
    fn evaluate(&self, t: f32) -> Color {
        self.evaluate_with_ratio(t, LINE_RANGE_RATIO)
    }
}
