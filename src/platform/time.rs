//! Frame pacing
//!
//! The simulation advances exactly one tick per frame at a fixed rate.

use crate::consts::{FRAME_RATE, MAX_SUBSTEPS};

/// Converts variable wall-clock frame times into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    /// `frame_rate == 0` means uncapped, which still ticks at `FRAME_RATE`
    pub fn new(frame_rate: u32) -> Self {
        let rate = if frame_rate == 0 { FRAME_RATE } else { frame_rate };
        Self {
            step: 1.0 / rate as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `dt` seconds of wall time and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Long stalls (hidden tab, debugger) would otherwise replay seconds of play
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}

/// Sleeps the calling thread so frames start at most `frame_rate` times a second
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Option<std::time::Duration>,
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameLimiter {
    /// `frame_rate == 0` disables limiting
    pub fn new(frame_rate: u32) -> Self {
        let frame = (frame_rate > 0)
            .then(|| std::time::Duration::from_secs_f64(1.0 / f64::from(frame_rate)));
        Self {
            frame,
            last: std::time::Instant::now(),
        }
    }

    /// Block until the current frame's time slot has elapsed
    pub fn wait(&mut self) {
        if let Some(frame) = self.frame {
            let elapsed = self.last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last = std::time::Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_only() {
        let mut step = FixedStep::new(60);
        assert_eq!(step.advance(0.5 / 60.0), 0);
        assert_eq!(step.advance(0.6 / 60.0), 1);
        assert_eq!(step.advance(2.0 / 60.0), 2);
    }

    #[test]
    fn test_substeps_capped() {
        let mut step = FixedStep::new(60);
        assert_eq!(step.advance(1.0), MAX_SUBSTEPS);
        // Backlog is dropped rather than replayed
        assert!(step.advance(0.0) <= 1);
    }

    #[test]
    fn test_uncapped_rate_keeps_default_step() {
        let settings = crate::Settings::from_json(r#"{ "frame_rate": 0 }"#).unwrap();
        let mut step = FixedStep::new(settings.frame_rate);
        assert_eq!(step.step(), FixedStep::new(FRAME_RATE).step());

        let ticks: u32 = (0..60).map(|_| step.advance(1.0 / 60.0)).sum();
        assert!((59..=60).contains(&ticks));
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut step = FixedStep::new(60);
        assert_eq!(step.advance(-1.0), 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_limiter_paces_frames() {
        let mut limiter = FrameLimiter::new(100);
        let start = std::time::Instant::now();
        for _ in 0..3 {
            limiter.wait();
        }
        assert!(start.elapsed() >= std::time::Duration::from_millis(25));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_uncapped_limiter_does_not_sleep() {
        let mut limiter = FrameLimiter::new(0);
        let start = std::time::Instant::now();
        for _ in 0..100 {
            limiter.wait();
        }
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }
}
