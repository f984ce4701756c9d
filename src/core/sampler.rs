use std::collections::VecDeque;

use glam::Vec3;
use log::trace;
use serde::Serialize;

use super::config::TrailConfig;

/// One captured point of the trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub position: Vec3,
    /// Capture time in seconds on the caller's clock, which may be epoch-based
    pub timestamp: f64,
}

impl Sample {
    pub fn new(position: Vec3, timestamp: f64) -> Self {
        Self { position, timestamp }
    }
}

/// What a single `update` did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UpdateResult {
    /// Samples dropped because they outlived the lifetime
    pub expired: usize,
    pub inserted: bool,
    /// Samples dropped to stay within capacity
    pub evicted: usize,
}

impl UpdateResult {
    /// True if geometry built from the previous buffer is stale
    pub fn changed(&self) -> bool {
        self.expired > 0 || self.inserted || self.evicted > 0
    }
}

/// Position along the trail handed to curves: 0 at the head (newest
/// sample), 1 at the tail (oldest). A single sample sits at 0.
pub fn normalized_position(index: usize, len: usize) -> f32 {
    if len <= 1 {
        0.0
    } else {
        index as f32 / (len - 1) as f32
    }
}

/// Time-ordered buffer of recent positions, newest first
#[derive(Debug, Clone, Default)]
pub struct TrailSampler {
    samples: VecDeque<Sample>,
    config: TrailConfig,
}

impl TrailSampler {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            samples: VecDeque::with_capacity(config.capacity()),
            config,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Changes apply from the next `update`; existing samples are kept as-is
    pub fn config_mut(&mut self) -> &mut TrailConfig {
        &mut self.config
    }

    /// Advance the trail to `now` with the tracked object at `position`.
    /// `now` must not decrease between calls.
    pub fn update(&mut self, position: Vec3, now: f64) -> UpdateResult {
        let mut result = UpdateResult::default();
        let lifetime = self.config.lifetime();

        // Timestamps decrease front to back, so stop at the first live sample
        while let Some(oldest) = self.samples.back() {
            if oldest.timestamp + lifetime >= now {
                break;
            }
            self.samples.pop_back();
            result.expired += 1;
        }

        let should_insert = match self.samples.front() {
            None => true,
            // A frame that did not advance time cannot add a sample
            Some(head) => {
                now > head.timestamp
                    && head.position.distance_squared(position) > self.config.min_distance_sq()
            }
        };
        if should_insert {
            self.samples.push_front(Sample::new(position, now));
            result.inserted = true;
        }

        while self.samples.len() > self.config.capacity() {
            self.samples.pop_back();
            result.evicted += 1;
        }

        if result.changed() {
            trace!(
                "trail update t={:.3}: expired={} inserted={} evicted={} len={}",
                now,
                result.expired,
                result.inserted,
                result.evicted,
                self.samples.len()
            );
        }

        result
    }

    /// Drop every sample; the next `update` inserts unconditionally
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Owned copy of the buffer, newest first
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    /// Borrow the buffer as one slice, newest first
    pub fn as_contiguous(&mut self) -> &[Sample] {
        self.samples.make_contiguous()
    }

    pub fn head(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
