//! A single gap obstacle: an upper and a lower rectangle sharing one x

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub upper: Rect,
    pub lower: Rect,
}

impl ObstaclePair {
    /// Pair at horizontal position `x` whose gap starts `gap_offset` below the top.
    ///
    /// `upper.height + gap_size + lower.height == window_height`.
    pub fn new(x: f32, gap_offset: f32, tuning: &Tuning) -> Self {
        let lower_top = gap_offset + tuning.gap_size;
        Self {
            upper: Rect::new(x, 0.0, tuning.pipe_width, gap_offset),
            lower: Rect::new(
                x,
                lower_top,
                tuning.pipe_width,
                tuning.window_height - lower_top,
            ),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.upper.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.upper.right()
    }

    /// Top of the opening (bottom edge of the upper rectangle)
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.upper.bottom()
    }

    /// Bottom of the opening (top edge of the lower rectangle)
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.lower.y
    }

    /// Move both rectangles together
    pub fn shift(&mut self, dx: f32) {
        self.upper.x += dx;
        self.lower.x += dx;
    }

    /// True once the right edge has crossed the left screen boundary
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn intersects(&self, rect: &Rect) -> bool {
        self.upper.intersects(rect) || self.lower.intersects(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_gap_offset() {
        let tuning = Tuning::default();
        let pair = ObstaclePair::new(800.0, 150.0, &tuning);

        assert_eq!(pair.upper.height, 150.0);
        assert_eq!(pair.lower.height, 250.0);
        assert_eq!(pair.lower.y, 350.0);
        assert_eq!(pair.gap_bottom() - pair.gap_top(), tuning.gap_size);
        assert_eq!(
            pair.upper.height + tuning.gap_size + pair.lower.height,
            tuning.window_height
        );
    }

    #[test]
    fn test_shift_keeps_rectangles_aligned() {
        let tuning = Tuning::default();
        let mut pair = ObstaclePair::new(800.0, 10.0, &tuning);
        pair.shift(-3.0);
        assert_eq!(pair.upper.x, 797.0);
        assert_eq!(pair.lower.x, 797.0);
        assert_eq!(pair.right(), 877.0);
    }

    #[test]
    fn test_off_screen() {
        let tuning = Tuning::default();
        let mut pair = ObstaclePair::new(-80.0, 10.0, &tuning);
        assert!(!pair.is_off_screen());
        pair.shift(-0.5);
        assert!(pair.is_off_screen());
    }
}
