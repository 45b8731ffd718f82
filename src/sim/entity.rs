//! Player and enemy vehicles
//!
//! Positions are sprite centres; sizes are full extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::spawn_point;

/// What an explosion animation leads to when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    /// Player was hit but has lives left; recovers afterwards
    Damage,
    /// Entity is destroyed once the animation ends
    Fatal,
}

/// Explosion animation in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Animation frame, 0..EXPLOSION_FRAMES
    pub frame: u8,
}

impl Explosion {
    pub fn new(kind: ExplosionKind) -> Self {
        Self { kind, frame: 0 }
    }

    /// Step one animation frame; true once the last frame has been shown
    fn advance(&mut self) -> bool {
        self.frame = self.frame.saturating_add(1);
        self.frame >= EXPLOSION_FRAMES
    }
}

/// Enemy vehicle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Car,
    Truck,
    Police,
}

impl EnemyKind {
    /// Sprite extents
    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Car => Vec2::new(60.0, 110.0),
            EnemyKind::Truck => Vec2::new(70.0, 180.0),
            EnemyKind::Police => Vec2::new(60.0, 120.0),
        }
    }
}

/// Player car extents
pub const PLAYER_SIZE: Vec2 = Vec2::new(60.0, 110.0);

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub is_dead: bool,
    pub explosion: Option<Explosion>,
}

impl Player {
    pub fn new(lives: u32) -> Self {
        Self {
            pos: spawn_point(),
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            lives,
            is_dead: false,
            explosion: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn is_exploding(&self) -> bool {
        self.explosion.is_some()
    }

    /// Set velocity from a heading whose components are -1, 0 or 1
    pub fn steer(&mut self, heading: Vec2) {
        self.vel = heading * PLAYER_SPEED;
    }

    /// Integrate velocity, keeping the car on screen
    pub fn update(&mut self, dt: f32, screen: Vec2) {
        self.pos += self.vel * dt;
        let half = self.size / 2.0;
        self.pos = self.pos.clamp(half, (screen - half).max(half));
    }

    /// Teleport back to spawn and stop
    pub fn reset_to_spawn(&mut self) {
        self.pos = spawn_point();
        self.vel = Vec2::ZERO;
    }

    /// Lose a life and play the damage animation
    pub fn take_damage(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.explosion = Some(Explosion::new(ExplosionKind::Damage));
    }

    /// Start the final explosion
    pub fn explode(&mut self) {
        self.explosion = Some(Explosion::new(ExplosionKind::Fatal));
    }

    /// Advance the explosion animation by one frame.
    ///
    /// Returns the kind of explosion that just finished, if any. A finished
    /// fatal explosion marks the player dead.
    pub fn advance_explosion(&mut self) -> Option<ExplosionKind> {
        let explosion = self.explosion.as_mut()?;
        if !explosion.advance() {
            return None;
        }
        let kind = explosion.kind;
        self.explosion = None;
        if kind == ExplosionKind::Fatal {
            self.is_dead = true;
        }
        Some(kind)
    }
}

/// An oncoming vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub is_dead: bool,
    pub explosion: Option<Explosion>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            size: kind.size(),
            is_dead: false,
            explosion: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn is_exploding(&self) -> bool {
        self.explosion.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bottom edge of the sprite
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn explode(&mut self) {
        if self.explosion.is_none() {
            self.explosion = Some(Explosion::new(ExplosionKind::Fatal));
        }
    }

    /// Advance the explosion animation; a finished explosion marks the enemy dead
    pub fn advance_explosion(&mut self) -> bool {
        let Some(explosion) = self.explosion.as_mut() else {
            return false;
        };
        if explosion.advance() {
            self.explosion = None;
            self.is_dead = true;
            return true;
        }
        false
    }
}
