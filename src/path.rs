use clap::ValueEnum;
use glam::Vec3;
use std::f64::consts::TAU;

/// Shape of the demo motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathKind {
    /// Circle in the XZ plane
    Circle,
    /// Lemniscate in the XZ plane with a gentle vertical bob
    FigureEight,
    /// Straight line along X, moving one second then resting one second
    StopAndGo,
}

/// Position of a tracked object over time
#[derive(Debug, Clone, Copy)]
pub struct MotionPath {
    pub kind: PathKind,
    pub radius: f32,
    /// Revolutions per second for closed paths, units per second for lines
    pub speed: f32,
}

impl MotionPath {
    pub fn new(kind: PathKind, radius: f32, speed: f32) -> Self {
        Self { kind, radius, speed }
    }

    /// Phase angle in [0, TAU), reduced in f64 so late times keep precision
    fn angle_at(&self, t: f64) -> f32 {
        (t * self.speed as f64 * TAU).rem_euclid(TAU) as f32
    }

    pub fn position_at(&self, t: f64) -> Vec3 {
        match self.kind {
            PathKind::Circle => {
                let angle = self.angle_at(t);
                Vec3::new(angle.cos(), 0.0, angle.sin()) * self.radius
            }
            PathKind::FigureEight => {
                let angle = self.angle_at(t);
                let (s, c) = angle.sin_cos();
                let denom = 1.0 + s * s;
                Vec3::new(
                    self.radius * c / denom,
                    0.25 * self.radius * (2.0 * angle).sin(),
                    self.radius * s * c / denom,
                )
            }
            PathKind::StopAndGo => {
                let cycles = (t / 2.0).floor();
                let moving = (t - cycles * 2.0).min(1.0);
                Vec3::new(((cycles + moving) * self.speed as f64) as f32, 0.0, 0.0)
            }
        }
    }
}
