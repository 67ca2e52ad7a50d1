//! Collision detection
//!
//! Axis-aligned boxes only: the bird's box against every pipe box in the
//! field, plus the ceiling margin and the ground strip. The verdict is
//! binary - there is no partial damage or invulnerability window.

use glam::Vec2;

use super::pipes::PipeField;
use super::state::Bird;
use crate::consts::*;

/// An axis-aligned box, stored as center plus full extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Overlap test. Shared edges do not count as contact.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Outcome of the per-tick collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Alive,
    Dead,
}

/// Check the bird against the field and the screen bounds.
///
/// Checked in order: pipe boxes, ceiling margin, ground strip. The first
/// hit wins; which one tripped is not reported.
pub fn check_bird(bird: &Bird, field: &PipeField) -> Verdict {
    let bounds = bird.bounds();

    for pipe in field.iter() {
        if bounds.intersects(&pipe.lower_rect()) || bounds.intersects(&pipe.upper_rect()) {
            return Verdict::Dead;
        }
    }

    if bounds.top() <= -CEILING_MARGIN {
        return Verdict::Dead;
    }

    if bounds.bottom() >= GROUND_Y + GROUND_SLACK {
        return Verdict::Dead;
    }

    Verdict::Alive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipes::PipePair;

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::new();
        bird.pos.y = y;
        bird
    }

    #[test]
    fn rect_overlap_and_miss() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn bird_clear_of_everything_is_alive() {
        let field = PipeField::new();
        assert_eq!(check_bird(&bird_at(SCREEN_H / 2.0), &field), Verdict::Alive);
    }

    #[test]
    fn bird_hits_a_pipe() {
        let mut field = PipeField::new();
        // Lower pipe top sits at y=300, directly over the bird's x
        field.push(PipePair::new(BIRD_X, 300.0, 100.0));
        assert_eq!(check_bird(&bird_at(320.0), &field), Verdict::Dead);
        // Inside the gap: alive
        assert_eq!(check_bird(&bird_at(250.0), &field), Verdict::Alive);
    }

    #[test]
    fn bird_hits_ceiling_and_ground() {
        let field = PipeField::new();
        let high = bird_at(-CEILING_MARGIN - 1.0);
        assert_eq!(check_bird(&high, &field), Verdict::Dead);

        let low = bird_at(GROUND_Y + GROUND_SLACK);
        assert_eq!(check_bird(&low, &field), Verdict::Dead);

        // Resting just above the trip line is still alive
        let skimming = bird_at(GROUND_Y + GROUND_SLACK - BIRD_H / 2.0 - 1.0);
        assert_eq!(check_bird(&skimming, &field), Verdict::Alive);
    }
}
