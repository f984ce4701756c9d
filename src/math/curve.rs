use crate::error::{Result, TrailError};
use crate::traits::ScalarCurve;

/// How a curve is sampled outside its key range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Clamp,
    Loop,
    PingPong,
}

impl WrapMode {
    fn wrap(self, t: f32, first: f32, last: f32) -> f32 {
        let span = last - first;
        if span <= 0.0 {
            return first;
        }
        match self {
            WrapMode::Clamp => t.clamp(first, last),
            WrapMode::Loop => first + (t - first).rem_euclid(span),
            WrapMode::PingPong => {
                let p = (t - first).rem_euclid(2.0 * span);
                first + if p > span { 2.0 * span - p } else { p }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear keyframed curve
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCurve {
    keys: Vec<Keyframe>,
    pub pre_wrap: WrapMode,
    pub post_wrap: WrapMode,
}

impl AnimationCurve {
    /// Build a curve from keys sorted by time
    pub fn new(keys: Vec<Keyframe>) -> Result<Self> {
        validate_key_times("curve", keys.iter().map(|k| k.time))?;
        Ok(Self {
            keys,
            pre_wrap: WrapMode::Clamp,
            post_wrap: WrapMode::Clamp,
        })
    }

    /// Straight line from `start` at t=0 to `end` at t=1
    pub fn linear(start: f32, end: f32) -> Self {
        Self {
            keys: vec![Keyframe::new(0.0, start), Keyframe::new(1.0, end)],
            pre_wrap: WrapMode::Clamp,
            post_wrap: WrapMode::Clamp,
        }
    }

    pub fn with_wrap(mut self, pre: WrapMode, post: WrapMode) -> Self {
        self.pre_wrap = pre;
        self.post_wrap = post;
        self
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];

        let t = if t < first.time {
            self.pre_wrap.wrap(t, first.time, last.time)
        } else if t > last.time {
            self.post_wrap.wrap(t, first.time, last.time)
        } else {
            t
        };

        let idx = self.keys.partition_point(|k| k.time <= t);
        if idx == 0 {
            return first.value;
        }
        if idx == self.keys.len() {
            return last.value;
        }

        let a = self.keys[idx - 1];
        let b = self.keys[idx];
        let dt = b.time - a.time;
        if dt <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * ((t - a.time) / dt)
    }
}

/// Ratio between the min and max ends of a two-value range used when a
/// trail is built. Line geometry always takes the max end.
pub const LINE_RANGE_RATIO: f32 = 1.0;

/// Scalar value over the trail's length
#[derive(Debug, Clone, PartialEq)]
pub enum CurveRange {
    Constant(f32),
    Curve { curve: AnimationCurve, multiplier: f32 },
    /// Constant picked between `min` and `max` by the range ratio
    TwoConstants { min: f32, max: f32 },
    /// Curve value picked between `min` and `max` by the range ratio
    TwoCurves {
        min: AnimationCurve,
        max: AnimationCurve,
        multiplier: f32,
    },
}

impl CurveRange {
    pub fn curve(curve: AnimationCurve, multiplier: f32) -> Self {
        CurveRange::Curve { curve, multiplier }
    }

    /// Value at `t` with `ratio` in [0, 1] selecting between two-value ends
    pub fn evaluate_with_ratio(&self, t: f32, ratio: f32) -> f32 {
        match self {
            CurveRange::Constant(v) => *v,
            CurveRange::Curve { curve, multiplier } => curve.evaluate(t) * multiplier,
            CurveRange::TwoConstants { min, max } => min + (max - min) * ratio,
            CurveRange::TwoCurves { min, max, multiplier } => {
                let lo = min.evaluate(t);
                let hi = max.evaluate(t);
                (lo + (hi - lo) * ratio) * multiplier
            }
        }
    }

    /// Pin sampling outside the key range to the end keys
    pub fn force_clamp(&mut self) {
        let curves = match self {
            CurveRange::Curve { curve, .. } => vec![curve],
            CurveRange::TwoCurves { min, max, .. } => vec![min, max],
            CurveRange::Constant(_) | CurveRange::TwoConstants { .. } => Vec::new(),
        };
        for curve in curves {
            curve.pre_wrap = WrapMode::Clamp;
            curve.post_wrap = WrapMode::Clamp;
        }
    }
}

impl Default for CurveRange {
    fn default() -> Self {
        CurveRange::Constant(1.0)
    }
}

impl ScalarCurve for CurveRange {
    fn evaluate(&self, t: f32) -> f32 {
        self.evaluate_with_ratio(t, LINE_RANGE_RATIO)
    }
}

/// Shared key validation for curves and gradients
pub(crate) fn validate_key_times(
    kind: &'static str,
    times: impl Iterator<Item = f32>,
) -> Result<()> {
    let mut prev: Option<f32> = None;
    let mut count = 0;
    for (index, time) in times.enumerate() {
        if time.is_nan() || prev.is_some_and(|p| time < p) {
            return Err(TrailError::UnsortedKeys { kind, index, time });
        }
        prev = Some(time);
        count += 1;
    }
    if count == 0 {
        return Err(TrailError::EmptyKeys(kind));
    }
    Ok(())
}
