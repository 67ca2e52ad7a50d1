//! Scoring
//!
//! A pair scores the moment its center has crossed the bird's fixed x.
//! The per-pair `scored` flag is the sole source of truth: the crossing
//! test only triggers the increment, so no scroll speed or tick rate can
//! skip a point, and nothing can count a pair twice.

use super::pipes::PipeField;

/// Current and best score. Best survives rounds for the process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub current: u32,
    pub best: u32,
}

impl ScoreBoard {
    /// Called on entering Playing.
    pub fn reset_round(&mut self) {
        self.current = 0;
    }

    /// Called on the Playing -> Title edge. Returns true on a new best.
    pub fn finish_round(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }
}

/// Award a point for every unscored pair whose center has passed
/// `score_line_x`. Returns how many points were awarded this tick
/// (normally 0 or 1; more only if spawn spacing ever allowed it).
pub fn award_passed_pipes(field: &mut PipeField, board: &mut ScoreBoard, score_line_x: f32) -> u32 {
    let mut awarded = 0;
    for pipe in field.iter_mut() {
        if !pipe.scored && pipe.center_x <= score_line_x {
            pipe.scored = true;
            board.current += 1;
            awarded += 1;
        }
    }
    awarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipes::PipePair;

    #[test]
    fn pair_scores_once_for_its_whole_lifetime() {
        let mut field = PipeField::new();
        field.push(PipePair::new(60.0, 300.0, 100.0));
        let mut board = ScoreBoard::default();

        assert_eq!(award_passed_pipes(&mut field, &mut board, 50.0), 0);

        // Crossing tick
        field.advance(20.0);
        assert_eq!(award_passed_pipes(&mut field, &mut board, 50.0), 1);
        assert_eq!(board.current, 1);

        // Every later tick: still behind the line, flag blocks re-scoring
        for _ in 0..100 {
            field.advance(2.0);
            assert_eq!(award_passed_pipes(&mut field, &mut board, 50.0), 0);
        }
        assert_eq!(board.current, 1);
    }

    #[test]
    fn a_large_step_cannot_skip_a_point() {
        let mut field = PipeField::new();
        field.push(PipePair::new(200.0, 300.0, 100.0));
        let mut board = ScoreBoard::default();

        // One huge scroll step jumps the pair far past the line
        field.advance(500.0);
        assert_eq!(award_passed_pipes(&mut field, &mut board, 50.0), 1);
    }

    #[test]
    fn best_is_monotonic_across_rounds() {
        let mut board = ScoreBoard::default();
        board.current = 5;
        assert!(board.finish_round());
        assert_eq!(board.best, 5);

        board.reset_round();
        board.current = 3;
        assert!(!board.finish_round());
        assert_eq!(board.best, 5);

        board.reset_round();
        board.current = 9;
        assert!(board.finish_round());
        assert_eq!(board.best, 9);
    }
}
