use crate::error::{Result, TrailError};

pub const DEFAULT_LIFETIME: f64 = 5.0;
pub const DEFAULT_MIN_DISTANCE: f32 = 1.0;
pub const DEFAULT_CAPACITY: usize = 100;

/// Floor applied to a zero spawn distance. Movement above it still spawns
/// a sample, so positional jitter larger than this on a resting object
/// keeps growing the trail.
pub const MIN_DISTANCE_EPSILON: f32 = 1e-4;

/// Sampling parameters for a trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailConfig {
    lifetime: f64,
    min_distance: f32,
    min_distance_sq: f32,
    capacity: usize,
}

impl TrailConfig {
    pub fn new(lifetime: f64, min_distance: f32) -> Result<Self> {
        let mut config = Self::default();
        config.set_lifetime(lifetime)?;
        config.set_min_distance(min_distance)?;
        Ok(config)
    }

    pub fn with_capacity(mut self, capacity: usize) -> Result<Self> {
        self.set_capacity(capacity)?;
        Ok(self)
    }

    /// Seconds a sample stays alive. `f64::INFINITY` disables expiry.
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn min_distance_sq(&self) -> f32 {
        self.min_distance_sq
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_lifetime(&mut self, lifetime: f64) -> Result<()> {
        // NaN fails this comparison too
        if !(lifetime > 0.0) {
            return Err(TrailError::InvalidLifetime(lifetime));
        }
        self.lifetime = lifetime;
        Ok(())
    }

    /// Zero is clamped to [`MIN_DISTANCE_EPSILON`]; negative, NaN and
    /// infinite values are rejected.
    pub fn set_min_distance(&mut self, min_distance: f32) -> Result<()> {
        if !min_distance.is_finite() || min_distance < 0.0 {
            return Err(TrailError::InvalidMinDistance(min_distance));
        }
        let min_distance = min_distance.max(MIN_DISTANCE_EPSILON);
        self.min_distance = min_distance;
        self.min_distance_sq = min_distance * min_distance;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(TrailError::ZeroCapacity);
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            lifetime: DEFAULT_LIFETIME,
            min_distance: DEFAULT_MIN_DISTANCE,
            min_distance_sq: DEFAULT_MIN_DISTANCE * DEFAULT_MIN_DISTANCE,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
