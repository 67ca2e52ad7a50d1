//! Data-driven game balance
//!
//! Everything that changes how the game *feels* lives here, so a round can
//! be re-balanced from a JSON file without touching the sim.

use serde::{Deserialize, Serialize};

/// Balance values consumed by the simulation.
///
/// All per-tick quantities assume the fixed 120 Hz tick rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration in px/tick²
    pub gravity: f32,
    /// Velocity assigned (not added) on a flap, px/tick
    pub flap_impulse: f32,
    /// Leftward pipe scroll speed in px/tick
    pub scroll_speed: f32,
    /// Vertical distance between a pair's lower and upper pipe
    pub pipe_gap: f32,
    /// Candidate gap-center heights, chosen uniformly at spawn
    pub gap_centers: Vec<f32>,
    /// Ticks between pipe spawns (180 = 1.5 s)
    pub spawn_period_ticks: u32,
    /// Ticks between wing animation frames (24 = 200 ms)
    pub anim_period_ticks: u32,
    /// Ground strip scroll step in px/tick
    pub ground_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            flap_impulse: -2.1,
            scroll_speed: 2.0,
            pipe_gap: 100.0,
            gap_centers: vec![200.0, 250.0, 300.0, 350.0, 400.0],
            spawn_period_ticks: 180,
            anim_period_ticks: 24,
            ground_step: 1.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any error.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {path}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_tuning_file_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 0.1}"#).unwrap();
        assert_eq!(tuning.gravity, 0.1);
        assert_eq!(tuning.flap_impulse, Tuning::default().flap_impulse);
        assert_eq!(tuning.gap_centers.len(), 5);
    }
}
