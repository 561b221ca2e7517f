//! Ordered sequence of obstacle pairs
//!
//! Pairs are kept in spawn order, which is also x order (oldest leftmost).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstaclePair;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTrack {
    pairs: Vec<ObstaclePair>,
}

impl ObstacleTrack {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Append a pair at the right end
    pub fn push(&mut self, pair: ObstaclePair) {
        self.pairs.push(pair);
    }

    /// Move every pair left by `speed`; returns the displacement applied
    pub fn advance(&mut self, speed: f32) -> f32 {
        for pair in &mut self.pairs {
            pair.shift(-speed);
        }
        speed
    }

    /// Drop leading pairs that are fully off the left edge; returns how many
    pub fn reclaim(&mut self) -> usize {
        let gone = self
            .pairs
            .iter()
            .take_while(|p| p.is_off_screen())
            .count();
        self.pairs.drain(..gone);
        gone
    }

    /// Spawn a pair at the right edge when the track is empty or the newest
    /// pair has moved at least one spacing away from it
    pub fn maybe_spawn<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) -> bool {
        let due = match self.pairs.last() {
            None => true,
            Some(last) => tuning.window_width - last.x() >= tuning.pipe_spacing,
        };
        if !due {
            return false;
        }

        let gap_offset = rng.random_range(0..tuning.gap_offset_range().max(1)) as f32;
        self.pairs
            .push(ObstaclePair::new(tuning.window_width, gap_offset, tuning));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_when_empty() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut track = ObstacleTrack::new();

        assert!(track.maybe_spawn(&tuning, &mut rng));
        assert_eq!(track.len(), 1);
        assert_eq!(track.pairs()[0].x(), tuning.window_width);

        // Newest pair is at the right edge, nothing more is due
        assert!(!track.maybe_spawn(&tuning, &mut rng));
    }

    #[test]
    fn test_spawns_after_spacing() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut track = ObstacleTrack::new();
        track.maybe_spawn(&tuning, &mut rng);

        let mut frames = 0;
        loop {
            track.advance(tuning.pipe_speed);
            frames += 1;
            if track.maybe_spawn(&tuning, &mut rng) {
                break;
            }
        }
        // 800 - 3k <= 400 first holds at k = 134
        assert_eq!(frames, 134);
        assert_eq!(track.len(), 2);
        assert!(track.pairs()[0].x() < track.pairs()[1].x());
    }

    #[test]
    fn test_reclaim_only_leading_off_screen() {
        let tuning = Tuning::default();
        let mut track = ObstacleTrack::new();
        track.push(ObstaclePair::new(-81.0, 0.0, &tuning));
        track.push(ObstaclePair::new(-80.0, 0.0, &tuning));
        track.push(ObstaclePair::new(300.0, 0.0, &tuning));

        assert_eq!(track.reclaim(), 1);
        assert_eq!(track.len(), 2);
        assert_eq!(track.pairs()[0].x(), -80.0);
    }

    #[test]
    fn test_reclaim_empty_track() {
        let mut track = ObstacleTrack::new();
        assert_eq!(track.reclaim(), 0);
        assert!(track.is_empty());
    }

    #[test]
    fn test_advance_returns_displacement() {
        let tuning = Tuning::default();
        let mut track = ObstacleTrack::new();
        track.push(ObstaclePair::new(500.0, 100.0, &tuning));
        assert_eq!(track.advance(3.0), 3.0);
        assert_eq!(track.pairs()[0].x(), 497.0);
        assert_eq!(track.pairs()[0].lower.x, 497.0);
    }
}
