//! Pipe pairs and the scrolling obstacle field
//!
//! A pair is one passable gate: a lower and an upper pipe sharing one
//! horizontal position and one gap center. Boxes are derived on demand from
//! those two values plus the fixed sprite size - never cached, so the
//! drawable box and the collision box cannot diverge.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// One gate: lower pipe anchored at `gap_center` extending down, upper pipe
/// anchored `gap` above it extending up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    /// Shared horizontal center of both pipes
    pub center_x: f32,
    /// Top edge of the lower pipe
    pub gap_center: f32,
    /// Vertical distance between the pipes, fixed for the pair's lifetime
    pub gap: f32,
    /// Set once this pair has been scored; sole guard against re-scoring
    pub scored: bool,
}

impl PipePair {
    pub fn new(center_x: f32, gap_center: f32, gap: f32) -> Self {
        Self {
            center_x,
            gap_center,
            gap,
            scored: false,
        }
    }

    pub fn lower_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.center_x, self.gap_center + PIPE_H / 2.0),
            Vec2::new(PIPE_W, PIPE_H),
        )
    }

    pub fn upper_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.center_x, self.gap_center - self.gap - PIPE_H / 2.0),
            Vec2::new(PIPE_W, PIPE_H),
        )
    }

    pub fn right(&self) -> f32 {
        self.center_x + PIPE_W / 2.0
    }
}

/// Ordered sequence of pairs; front is the oldest/leftmost.
///
/// Only the field mutates pipe positions. Everything else reads boxes.
#[derive(Debug, Clone, Default)]
pub struct PipeField {
    pipes: Vec<PipePair>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new pair just past the right edge with a gap center drawn
    /// uniformly from the tuning's candidate set.
    pub fn spawn(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        let idx = rng.random_range(0..tuning.gap_centers.len());
        let gap_center = tuning.gap_centers[idx];
        self.pipes
            .push(PipePair::new(PIPE_SPAWN_X, gap_center, tuning.pipe_gap));
        log::debug!("spawned pipe pair, gap center {gap_center}");
    }

    /// Scroll every pair left by the given speed.
    pub fn advance(&mut self, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.center_x -= speed;
        }
    }

    /// Drop pairs whose right edge has scrolled past the cull threshold.
    /// `retain` keeps insertion order, so culling stays FIFO.
    pub fn cull(&mut self) {
        self.pipes.retain(|p| p.right() > PIPE_CULL_X);
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    pub fn push(&mut self, pipe: PipePair) {
        self.pipes.push(pipe);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pipes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn spawn_draws_from_candidate_heights() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = PipeField::new();
        for _ in 0..50 {
            field.spawn(&mut rng, &tuning);
        }
        for pipe in field.iter() {
            assert!(tuning.gap_centers.contains(&pipe.gap_center));
            assert_eq!(pipe.center_x, PIPE_SPAWN_X);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn pair_boxes_keep_a_fixed_gap() {
        let pipe = PipePair::new(100.0, 300.0, 100.0);
        let lower = pipe.lower_rect();
        let upper = pipe.upper_rect();
        assert_eq!(lower.top() - upper.bottom(), 100.0);
        assert_eq!(lower.center.x, upper.center.x);

        // The gap survives scrolling
        let mut moved = pipe;
        moved.center_x -= 500.0;
        assert_eq!(moved.lower_rect().top() - moved.upper_rect().bottom(), 100.0);
    }

    #[test]
    fn culling_is_fifo() {
        let mut field = PipeField::new();
        for i in 0..4 {
            field.push(PipePair::new(100.0 + i as f32 * 150.0, 300.0, 100.0));
        }
        // Scroll until the first two pairs are past the threshold
        for _ in 0..200 {
            field.advance(2.0);
            field.cull();
        }
        // Remaining pairs are still in spawn order, monotonically increasing x
        let xs: Vec<f32> = field.iter().map(|p| p.center_x).collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cull_threshold_uses_the_right_edge() {
        let mut field = PipeField::new();
        field.push(PipePair::new(PIPE_CULL_X - PIPE_W / 2.0 + 1.0, 300.0, 100.0));
        field.cull();
        assert_eq!(field.len(), 1);

        field.advance(2.0);
        field.cull();
        assert!(field.is_empty());
    }
}
