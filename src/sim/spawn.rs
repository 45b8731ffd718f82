//! Procedural wave layout
//!
//! Enemies start above the screen in one of six fixed lanes, stacked with a
//! minimum vertical gap, and drive down at a speed that ramps up partway
//! through long waves.

use glam::Vec2;
use rand::Rng;

use super::entity::{Enemy, EnemyKind};
use super::state::Level;
use crate::consts::*;
use crate::lane_offsets;
use crate::tuning::level_tuning;

/// Inputs to one wave layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub count: usize,
    /// Maximum number of speed steps across the wave
    pub ramp_cap: u32,
    pub base_velocity: f32,
}

impl SpawnParams {
    /// The level's own tuning
    pub fn for_level(level: Level) -> Self {
        let tuning = level_tuning(level);
        Self {
            count: tuning.enemy_count,
            ramp_cap: tuning.ramp_cap,
            base_velocity: tuning.base_velocity,
        }
    }

    /// Parameters used when a save is restored, whatever its level
    pub fn load_default(count: usize) -> Self {
        Self {
            count,
            ramp_cap: LOAD_RAMP_CAP,
            base_velocity: LOAD_BASE_VELOCITY,
        }
    }

    /// Highest speed any enemy of this wave can get
    pub fn max_velocity(&self) -> f32 {
        self.base_velocity + self.ramp_cap as f32 * RAMP_INCREMENT
    }
}

/// Sprite type by spawn index. Trucks take precedence over police cars.
pub fn enemy_kind_for_index(i: usize) -> EnemyKind {
    if i % 3 == 0 && i > 2 {
        EnemyKind::Truck
    } else if i % 5 == 0 && i > 2 {
        EnemyKind::Police
    } else {
        EnemyKind::Car
    }
}

/// Lay out a wave of `params.count` enemies
pub fn spawn_wave<R: Rng + ?Sized>(rng: &mut R, params: &SpawnParams, screen: Vec2) -> Vec<Enemy> {
    let lanes = lane_offsets(screen.x);
    let mut enemies = Vec::with_capacity(params.count);
    let mut placed_y: Vec<i32> = Vec::with_capacity(params.count);

    let ramp_interval = (params.count / 2).max(1);
    let mut ramp_steps = 0u32;
    let mut speed = params.base_velocity;
    let mut lane_fallbacks = 0u32;
    let mut slot_fallbacks = 0u32;

    for i in 0..params.count {
        let kind = enemy_kind_for_index(i);

        let x = match sample_lane(rng, &lanes, screen.x) {
            Some(x) => x,
            None => {
                lane_fallbacks += 1;
                lanes[rng.random_range(0..lanes.len())]
            }
        };

        let y = if placed_y.is_empty() {
            FIRST_ENEMY_Y
        } else {
            match sample_slot(rng, &placed_y, params.count) {
                Some(y) => y,
                None => {
                    slot_fallbacks += 1;
                    fallback_slot(&placed_y)
                }
            }
        };
        placed_y.push(y);

        enemies.push(Enemy::new(
            kind,
            Vec2::new(x as f32, y as f32),
            Vec2::new(0.0, speed),
        ));

        // The step takes effect from the next enemy on
        if i > 2 && i % ramp_interval == 0 && ramp_steps < params.ramp_cap {
            ramp_steps += 1;
            speed += RAMP_INCREMENT;
        }
    }

    let top_speed = enemies.last().map_or(params.base_velocity, |e| e.vel.y);
    log::info!(
        "Spawned wave of {} (ramp {}/{} steps, speed {}..{})",
        params.count,
        ramp_steps,
        params.ramp_cap,
        params.base_velocity,
        top_speed
    );
    if lane_fallbacks > 0 || slot_fallbacks > 0 {
        log::debug!("Spawn fallbacks: {lane_fallbacks} lane, {slot_fallbacks} slot");
    }

    enemies
}

/// Draw X positions across the screen until one lands exactly on a lane
fn sample_lane<R: Rng + ?Sized>(rng: &mut R, lanes: &[i32; 6], screen_width: f32) -> Option<i32> {
    let width = screen_width as i32;
    if width <= 0 {
        return None;
    }
    (0..LANE_SAMPLE_LIMIT)
        .map(|_| rng.random_range(0..width))
        .find(|x| lanes.contains(x))
}

/// Draw a Y above the screen until it clears every placed enemy by the
/// minimum separation
fn sample_slot<R: Rng + ?Sized>(rng: &mut R, placed_y: &[i32], count: usize) -> Option<i32> {
    let band = (count as i32).saturating_mul(SLOT_BAND_PER_ENEMY).max(1);
    (0..SLOT_SAMPLE_LIMIT)
        .map(|_| -(rng.random_range(0..band) + 100))
        .find(|&y| is_separated(y, placed_y))
}

/// Directly above the highest enemy so far
fn fallback_slot(placed_y: &[i32]) -> i32 {
    let top = placed_y.iter().copied().min().unwrap_or(FIRST_ENEMY_Y);
    top - MIN_VERTICAL_SEPARATION - 1
}

fn is_separated(y: i32, placed_y: &[i32]) -> bool {
    placed_y
        .iter()
        .all(|&other| (other - y).abs() > MIN_VERTICAL_SEPARATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);

    fn wave(seed: u64, params: SpawnParams) -> Vec<Enemy> {
        let mut rng = Pcg32::seed_from_u64(seed);
        spawn_wave(&mut rng, &params, SCREEN)
    }

    #[test]
    fn test_kind_precedence() {
        let kinds: Vec<EnemyKind> = (0..16).map(enemy_kind_for_index).collect();
        assert_eq!(kinds[0], EnemyKind::Car);
        assert_eq!(kinds[3], EnemyKind::Truck);
        assert_eq!(kinds[5], EnemyKind::Police);
        assert_eq!(kinds[6], EnemyKind::Truck);
        assert_eq!(kinds[10], EnemyKind::Police);
        // Multiple of both: truck wins
        assert_eq!(kinds[15], EnemyKind::Truck);
    }

    #[test]
    fn test_first_enemy_at_top_slot() {
        let enemies = wave(1, SpawnParams::for_level(Level::Level1));
        assert_eq!(enemies.len(), 20);
        assert_eq!(enemies[0].pos.y, FIRST_ENEMY_Y as f32);
        assert!(enemies.iter().all(|e| e.pos.y < 0.0));
    }

    #[test]
    fn test_speed_ramp_level1() {
        let enemies = wave(9, SpawnParams::for_level(Level::Level1));
        let speeds: Vec<f32> = enemies.iter().map(|e| e.vel.y).collect();
        // Interval of 10: enemy 10 still drives at base speed, enemy 11 on is one step up
        assert!(speeds[..11].iter().all(|&s| s == 70.0));
        assert!(speeds[11..].iter().all(|&s| s == 75.0));
    }

    #[test]
    fn test_ramp_cap_limits_steps() {
        // Interval of 3: steps after enemies 3 and 6, the second lands past the wave
        let params = SpawnParams {
            count: 7,
            ramp_cap: 0,
            base_velocity: 50.0,
        };
        let speeds = |params: SpawnParams| -> Vec<f32> {
            wave(3, params).iter().map(|e| e.vel.y).collect()
        };
        assert!(speeds(params).iter().all(|&s| s == 50.0));

        let stepped = speeds(SpawnParams { ramp_cap: 1, ..params });
        assert_eq!(stepped[..4], [50.0; 4]);
        assert_eq!(stepped[4..], [55.0; 3]);

        assert_eq!(speeds(SpawnParams { ramp_cap: 3, ..params }), stepped);
    }

    #[test]
    fn test_empty_wave() {
        assert!(wave(0, SpawnParams::load_default(0)).is_empty());
    }

    #[test]
    fn test_fallback_slot_clears_everyone() {
        let placed = [-100, -600, -350];
        let y = fallback_slot(&placed);
        assert!(is_separated(y, &placed));
    }

    #[test]
    fn test_narrow_screen_still_terminates() {
        let mut rng = Pcg32::seed_from_u64(5);
        let params = SpawnParams::load_default(4);
        let enemies = spawn_wave(&mut rng, &params, Vec2::new(200.0, 400.0));
        let lanes = lane_offsets(200.0);
        assert_eq!(enemies.len(), 4);
        assert!(enemies.iter().all(|e| lanes.contains(&(e.pos.x as i32))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_wave_layout(seed in any::<u64>(), count in 0usize..40, ramp_cap in 0u32..6) {
            let params = SpawnParams { count, ramp_cap, base_velocity: 60.0 };
            let enemies = wave(seed, params);
            let lanes = lane_offsets(SCREEN.x);

            prop_assert_eq!(enemies.len(), count);
            for (i, a) in enemies.iter().enumerate() {
                prop_assert!(lanes.contains(&(a.pos.x as i32)));
                prop_assert_eq!(a.kind, enemy_kind_for_index(i));
                for b in &enemies[i + 1..] {
                    prop_assert!((a.pos.y - b.pos.y).abs() > MIN_VERTICAL_SEPARATION as f32);
                }
            }
        }

        #[test]
        fn prop_speed_ramp_bounded(seed in any::<u64>(), count in 1usize..40, ramp_cap in 0u32..6) {
            let params = SpawnParams { count, ramp_cap, base_velocity: 60.0 };
            let enemies = wave(seed, params);

            prop_assert!(enemies.windows(2).all(|w| w[0].vel.y <= w[1].vel.y));
            for e in &enemies {
                prop_assert!(e.vel.y >= params.base_velocity);
                prop_assert!(e.vel.y <= params.max_velocity());
                prop_assert_eq!(e.vel.x, 0.0);
            }
        }
    }
}
