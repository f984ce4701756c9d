use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::info;
use serde::Serialize;

use motion_trail::cli::Cli;
use motion_trail::core::{FrameClock, RibbonMesh, Sample, TrailComponent, TrailConfig, UpdateResult};
use motion_trail::math::{AnimationCurve, Color, CurveRange, Gradient, GradientRange};
use motion_trail::path::MotionPath;

/// Per-frame line of the JSON report
#[derive(Debug, Serialize)]
struct FrameReport {
    frame: u64,
    time: f64,
    position: Vec3,
    #[serde(flatten)]
    update: UpdateResult,
    samples: usize,
    vertices: usize,
}

#[derive(Debug, Serialize)]
struct RunReport {
    frames: Vec<FrameReport>,
    rebuilds: u64,
    trail: Vec<Sample>,
}

#[derive(Debug, Default)]
struct RunStats {
    frames: u64,
    changed_frames: u64,
    inserted: u64,
    expired: u64,
    evicted: u64,
    peak_samples: usize,
}

impl RunStats {
    fn record(&mut self, result: &UpdateResult, samples: usize) {
        self.frames += 1;
        if result.changed() {
            self.changed_frames += 1;
        }
        if result.inserted {
            self.inserted += 1;
        }
        self.expired += result.expired as u64;
        self.evicted += result.evicted as u64;
        self.peak_samples = self.peak_samples.max(samples);
    }
}

fn build_trail(cli: &Cli) -> Result<TrailComponent<RibbonMesh>> {
    let config = TrailConfig::new(cli.lifetime, cli.min_distance)
        .and_then(|c| c.with_capacity(cli.capacity))
        .context("invalid trail settings")?;

    let mut trail = TrailComponent::from_factory(&mut RibbonMesh::new, config);

    trail.set_width(CurveRange::curve(AnimationCurve::linear(1.0, 0.0), cli.width));
    let head = Color::from_hsv(cli.hue, 0.8, 1.0);
    trail.set_color(GradientRange::Gradient(Gradient::fade(head, head.with_alpha(0.0))));

    Ok(trail)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    cli.validate()?;
    let frame_interval = cli.frame_interval()?;

    let mut trail = build_trail(&cli)?;
    let path = MotionPath::new(cli.path, cli.radius, cli.speed);
    let clock = if cli.realtime {
        FrameClock::realtime()
    } else {
        FrameClock::fixed(cli.fps)
    };
    let total_frames = (cli.duration * cli.fps).ceil() as u64;

    info!(
        "running {:?} path for {} frames ({}s at {} fps)",
        cli.path, total_frames, cli.duration, cli.fps
    );

    trail.enable();

    let mut stats = RunStats::default();
    let mut frames = Vec::new();

    for frame in clock.take(total_frames as usize) {
        let position = path.position_at(frame.time);
        let result = trail.update(position, frame.time);
        let samples = trail.sampler().len();
        stats.record(&result, samples);

        if cli.json {
            frames.push(FrameReport {
                frame: frame.number,
                time: frame.time,
                position,
                update: result,
                samples,
                vertices: trail.model().vertices().len(),
            });
        }

        if let Some(interval) = frame_interval {
            thread::sleep(interval);
        }
    }

    if cli.json {
        let report = RunReport {
            frames,
            rebuilds: trail.model().rebuild_count(),
            trail: trail.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mesh = trail.model();
        println!("Trail run complete: {} frames", stats.frames);
        println!("  Frames with changes: {}/{}", stats.changed_frames, stats.frames);
        println!("  Geometry rebuilds: {}", mesh.rebuild_count());
        println!(
            "  Samples: {} inserted, {} expired, {} evicted, peak {}",
            stats.inserted, stats.expired, stats.evicted, stats.peak_samples
        );
        println!(
            "  Final trail: {} samples, {} vertices, {} indices ({} bytes)",
            trail.sampler().len(),
            mesh.vertices().len(),
            mesh.indices().len(),
            mesh.vertex_bytes().len()
        );
        if let Some(head) = trail.sampler().head() {
            println!("  Head: {:?} at t={:.3}s", head.position, head.timestamp);
        }
    }

    trail.disable();
    Ok(())
}
