//! Data-driven level balance
//!
//! Each level seeds its wave from a fixed (count, ramp cap, base velocity)
//! triple. Only the spawner reads these.

use serde::{Deserialize, Serialize};

use crate::sim::Level;

/// Spawn tuning for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTuning {
    /// Enemies in the wave
    pub enemy_count: usize,
    /// Maximum number of speed-ramp steps across the wave
    pub ramp_cap: u32,
    /// Starting vertical speed (pixels/s)
    pub base_velocity: f32,
}

impl LevelTuning {
    const fn new(enemy_count: usize, ramp_cap: u32, base_velocity: f32) -> Self {
        Self {
            enemy_count,
            ramp_cap,
            base_velocity,
        }
    }
}

const LEVEL_TABLE: [LevelTuning; 5] = [
    LevelTuning::new(20, 2, 70.0),
    LevelTuning::new(25, 3, 70.0),
    LevelTuning::new(28, 3, 75.0),
    LevelTuning::new(30, 3, 75.0),
    LevelTuning::new(35, 4, 80.0),
];

/// Tuning for a level
pub fn level_tuning(level: Level) -> LevelTuning {
    LEVEL_TABLE[level.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waves_grow_with_level() {
        let counts: Vec<usize> = Level::ALL
            .iter()
            .map(|&l| level_tuning(l).enemy_count)
            .collect();
        assert_eq!(counts, vec![20, 25, 28, 30, 35]);
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_last_level_is_fastest() {
        let last = level_tuning(Level::Level5);
        assert_eq!(last.ramp_cap, 4);
        assert_eq!(last.base_velocity, 80.0);
    }
}
