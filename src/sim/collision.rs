//! Collision detection and damage
//!
//! Axis-aligned box overlap only. Tests are discrete per frame, so a fast
//! enemy can pass through the player between two frames.

use glam::Vec2;

use super::entity::{Enemy, Player};
use super::state::LifeToken;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of the given extents centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; boxes that only touch do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Check the player against the wave and apply damage for the first hit.
///
/// Enemies are tested in wave order. Once an overlap is found the player
/// must not already be exploding and must have a life token left, otherwise
/// nothing else is checked this frame. A hit pops one token, damages the
/// player, teleports it to spawn and explodes the enemy it touched.
///
/// Returns true if damage was applied. At most one hit per call.
pub fn check_collision(
    player: &mut Player,
    lives_track: &mut Vec<LifeToken>,
    enemies: &mut [Enemy],
) -> bool {
    let player_box = player.aabb();

    for (index, enemy) in enemies.iter_mut().enumerate() {
        if enemy.is_dead || !player_box.overlaps(&enemy.aabb()) {
            continue;
        }

        if player.is_exploding() || lives_track.is_empty() {
            return false;
        }

        lives_track.pop();
        player.take_damage();
        player.reset_to_spawn();
        enemy.explode();
        log::debug!(
            "Player hit by {:?} #{} at {:?}, {} lives left",
            enemy.kind,
            index,
            enemy.pos,
            player.lives
        );
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EnemyKind;
    use crate::sim::state::lives_track;
    use crate::spawn_point;

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy::new(EnemyKind::Car, pos, Vec2::new(0.0, 70.0))
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        assert!(a.overlaps(&Aabb::from_center(Vec2::new(9.0, 9.0), Vec2::splat(10.0))));
        // Touching edges do not overlap
        assert!(!a.overlaps(&Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0))));
        assert!(!a.overlaps(&Aabb::from_center(Vec2::new(0.0, -25.0), Vec2::splat(10.0))));
    }

    #[test]
    fn test_hit_consumes_one_life() {
        let mut player = Player::new(3);
        let mut track = lives_track(3);
        player.pos = Vec2::new(290.0, 300.0);
        let mut enemies = vec![enemy_at(Vec2::new(290.0, 320.0))];

        assert!(check_collision(&mut player, &mut track, &mut enemies));
        assert_eq!(player.lives, 2);
        assert_eq!(track.len(), 2);
        assert_eq!(player.pos, spawn_point());
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(enemies[0].is_exploding());
        assert!(!player.is_dead);
    }

    #[test]
    fn test_second_check_same_frame_is_ignored() {
        let mut player = Player::new(3);
        let mut track = lives_track(3);
        let mut enemies = vec![enemy_at(spawn_point()), enemy_at(spawn_point())];

        assert!(check_collision(&mut player, &mut track, &mut enemies));
        // Player is back at spawn, still overlapping, but exploding
        assert!(!check_collision(&mut player, &mut track, &mut enemies));
        assert_eq!(player.lives, 2);
        assert_eq!(track.len(), 2);
        assert!(!enemies[1].is_exploding());
    }

    #[test]
    fn test_first_enemy_in_wave_order_takes_the_hit() {
        let mut player = Player::new(2);
        let mut track = lives_track(2);
        let mut enemies = vec![
            enemy_at(Vec2::new(1110.0, -400.0)),
            enemy_at(spawn_point() + Vec2::new(0.0, 30.0)),
            enemy_at(spawn_point()),
        ];

        assert!(check_collision(&mut player, &mut track, &mut enemies));
        assert!(!enemies[0].is_exploding());
        assert!(enemies[1].is_exploding());
        assert!(!enemies[2].is_exploding());
    }

    #[test]
    fn test_no_tokens_no_damage() {
        let mut player = Player::new(0);
        let mut track = Vec::new();
        let mut enemies = vec![enemy_at(spawn_point())];

        assert!(!check_collision(&mut player, &mut track, &mut enemies));
        assert_eq!(player.lives, 0);
        assert!(!enemies[0].is_exploding());
    }

    #[test]
    fn test_miss() {
        let mut player = Player::new(3);
        let mut track = lives_track(3);
        let mut enemies = vec![enemy_at(Vec2::new(290.0, -100.0))];
        assert!(!check_collision(&mut player, &mut track, &mut enemies));
        assert_eq!(track.len(), 3);
    }
}
