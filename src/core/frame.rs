use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f64,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum TimeSource {
    /// Simulated time advancing a fixed step per frame
    Fixed { step: f64 },
    /// Wall-clock time
    RealTime { start: Instant },
}

/// Infinite iterator of monotonic frame times.
/// Use this in a loop: `for frame in clock.take(n) { ... }`
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: TimeSource,
    frame_number: u64,
    last_time: f64,
}

impl FrameClock {
    /// Deterministic clock at `fps` frames per second
    pub fn fixed(fps: f32) -> Self {
        Self {
            source: TimeSource::Fixed {
                step: 1.0 / fps as f64,
            },
            frame_number: 0,
            last_time: 0.0,
        }
    }

    /// Clock reading elapsed wall time, starting now
    pub fn realtime() -> Self {
        Self {
            source: TimeSource::RealTime {
                start: Instant::now(),
            },
            frame_number: 0,
            last_time: 0.0,
        }
    }

    fn read(&self) -> f64 {
        match self.source {
            // Multiply rather than accumulate so long runs don't drift
            TimeSource::Fixed { step } => self.frame_number as f64 * step,
            TimeSource::RealTime { start } => start.elapsed().as_secs_f64(),
        }
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        // Never report time going backwards
        let time = self.read().max(self.last_time);
        let delta = (time - self.last_time) as f32;

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_time = time;

        Some(info)
    }
}
