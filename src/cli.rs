// cli.rs - Command-line interface configuration
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::core::{DEFAULT_CAPACITY, DEFAULT_LIFETIME, DEFAULT_MIN_DISTANCE};
use crate::path::PathKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "motion-trail")]
#[command(about = "Drive a trail along a motion path and report its geometry", long_about = None)]
pub struct Cli {
    /// Seconds a sample stays on the trail
    #[arg(long, default_value_t = DEFAULT_LIFETIME)]
    pub lifetime: f64,

    /// Distance the object must move before a new sample is taken
    #[arg(long = "min-distance", default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: f32,

    /// Maximum samples kept on the trail
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Frames per second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seconds to run
    #[arg(long, default_value_t = 10.0)]
    pub duration: f32,

    #[arg(long, value_enum, default_value_t = PathKind::Circle)]
    pub path: PathKind,

    #[arg(long, default_value_t = 5.0)]
    pub radius: f32,

    #[arg(long, default_value_t = 0.25)]
    pub speed: f32,

    /// Ribbon width at the head, tapering to zero at the tail
    #[arg(long, default_value_t = 0.5)]
    pub width: f32,

    /// Trail hue in [0, 1]
    #[arg(long, default_value_t = 0.55)]
    pub hue: f32,

    /// Pace frames against the wall clock instead of simulating
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Print per-frame reports and the final trail as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    /// Reject run settings the demo loop cannot use
    pub fn validate(&self) -> Result<()> {
        if self.fps.is_nan() || self.fps <= 0.0 {
            bail!("--fps must be positive, got {}", self.fps);
        }
        if self.duration.is_nan() || self.duration < 0.0 {
            bail!("--duration must not be negative, got {}", self.duration);
        }
        Ok(())
    }

    /// Sleep between frames in real-time mode, `None` when simulating
    pub fn frame_interval(&self) -> Result<Option<Duration>> {
        if !self.realtime {
            return Ok(None);
        }
        let interval = Duration::try_from_secs_f32(1.0 / self.fps)
            .with_context(|| format!("--fps {} gives no usable frame interval", self.fps))?;
        Ok(Some(interval))
    }
}
