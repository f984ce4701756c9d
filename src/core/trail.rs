use glam::Vec3;
use log::debug;

use super::config::TrailConfig;
use super::sampler::{Sample, TrailSampler, UpdateResult};
use crate::error::Result;
use crate::math::{CurveRange, GradientRange};
use crate::traits::{LineModel, LineModelFactory};

/// Trail effect - samples a tracked position each frame and keeps its
/// line model in sync with the sample buffer
pub struct TrailComponent<M: LineModel> {
    sampler: TrailSampler,
    width: CurveRange,
    color: GradientRange,
    model: M,
    enabled: bool,
}

impl<M: LineModel> TrailComponent<M> {
    /// Create the component and its line model. Starts disabled.
    pub fn from_factory<F>(factory: &mut F, config: TrailConfig) -> Self
    where
        F: LineModelFactory<Model = M>,
    {
        let mut model = factory.create_model();
        model.set_capacity(config.capacity());
        debug!(
            "trail created: lifetime={}s min_distance={} capacity={}",
            config.lifetime(),
            config.min_distance(),
            config.capacity()
        );

        Self {
            sampler: TrailSampler::new(config),
            width: CurveRange::default(),
            color: GradientRange::default(),
            model,
            enabled: false,
        }
    }

    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.rebuild();
        debug!("trail enabled");
    }

    /// Drops every sample and clears the model
    pub fn disable(&mut self) {
        self.enabled = false;
        self.sampler.reset();
        self.model.clear();
        debug!("trail disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sample the tracked object for this frame. Geometry is rebuilt before
    /// returning whenever the buffer changed.
    pub fn update(&mut self, position: Vec3, now: f64) -> UpdateResult {
        if !self.enabled {
            return UpdateResult::default();
        }

        let result = self.sampler.update(position, now);
        if result.changed() {
            self.rebuild();
        }
        result
    }

    /// Clear the trail without leaving the enabled state
    pub fn reset(&mut self) {
        self.sampler.reset();
        self.model.clear();
    }

    pub fn set_lifetime(&mut self, lifetime: f64) -> Result<()> {
        self.sampler.config_mut().set_lifetime(lifetime)?;
        debug!("trail lifetime set to {}s", lifetime);
        Ok(())
    }

    pub fn set_min_distance(&mut self, min_distance: f32) -> Result<()> {
        let config = self.sampler.config_mut();
        config.set_min_distance(min_distance)?;
        debug!("trail min distance set to {}", config.min_distance());
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.sampler.config_mut().set_capacity(capacity)?;
        self.model.set_capacity(capacity);
        Ok(())
    }

    /// Width over the trail. Curves are clamped at both ends.
    pub fn set_width(&mut self, mut width: CurveRange) {
        width.force_clamp();
        self.width = width;
        if self.enabled {
            self.rebuild();
        }
    }

    pub fn set_color(&mut self, color: GradientRange) {
        self.color = color;
        if self.enabled {
            self.rebuild();
        }
    }

    pub fn config(&self) -> &TrailConfig {
        self.sampler.config()
    }

    pub fn width(&self) -> &CurveRange {
        &self.width
    }

    pub fn color(&self) -> &GradientRange {
        &self.color
    }

    pub fn sampler(&self) -> &TrailSampler {
        &self.sampler
    }

    pub fn snapshot(&self) -> Vec<Sample> {
        self.sampler.snapshot()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    fn rebuild(&mut self) {
        let samples = self.sampler.as_contiguous();
        self.model.rebuild(samples, &self.width, &self.color);
    }
}
