//! Lane Rush - A lane-dodging arcade simulation
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, spawning, collisions, game state)
//! - `persistence`: Single-slot text save/load
//! - `renderer`: Frame buffer seam the simulation draws into
//! - `session`: Ties simulation, save slot and frame buffer together
//! - `tuning`: Data-driven level balance

pub mod persistence;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default screen size
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Player spawn point (also where a hit player is teleported back to)
    pub const PLAYER_SPAWN_X: f32 = 690.0;
    pub const PLAYER_SPAWN_Y: f32 = 600.0;
    /// Player steering speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 400.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Fixed lane offsets from the left edge; the sixth lane sits this far
    /// from the right edge
    pub const LANE_OFFSETS: [i32; 5] = [290, 490, 690, 890, 1110];
    pub const RIGHT_LANE_INSET: i32 = 230;

    /// Minimum vertical distance between two enemies of one wave
    pub const MIN_VERTICAL_SEPARATION: i32 = 240;
    /// Y of the first enemy in every wave
    pub const FIRST_ENEMY_Y: i32 = -100;
    /// Vertical spawn band per enemy in the wave
    pub const SLOT_BAND_PER_ENEMY: i32 = 250;
    /// Speed added per ramp step (pixels/s)
    pub const RAMP_INCREMENT: f32 = 5.0;
    /// Rejection-sampling attempts before falling back to a deterministic pick
    pub const LANE_SAMPLE_LIMIT: u32 = 20_000;
    pub const SLOT_SAMPLE_LIMIT: u32 = 512;

    /// Enemies whose bottom edge reaches this far above the screen bottom escape
    pub const BOTTOM_MARGIN: f32 = 75.0;

    /// Explosion animation: frame count and seconds per frame (70 ms timer)
    pub const EXPLOSION_FRAMES: u8 = 8;
    pub const EXPLOSION_STEP_SECS: f32 = 0.070;

    /// One point every this many ongoing frames
    pub const SCORE_CADENCE_FRAMES: u32 = 25;
    /// Score lost per damaging collision
    pub const COLLISION_PENALTY: i64 = 100;

    /// Spawn parameters used when restoring a save (not the level's own)
    pub const LOAD_RAMP_CAP: u32 = 2;
    pub const LOAD_BASE_VELOCITY: f32 = 50.0;

    /// Largest enemy count and life count a save may restore
    pub const MAX_SAVED_ENEMIES: usize = 500;
    pub const MAX_SAVED_LIVES: u32 = 99;

    /// Frames between accepted menu navigation inputs
    pub const MENU_COOLDOWN_FRAMES: u32 = 20;

    /// HUD life token layout
    pub const LIFE_TOKEN_ORIGIN: (f32, f32) = (30.0, 80.0);
    pub const LIFE_TOKEN_SPACING: f32 = 45.0;
}

/// Player spawn point as a vector
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::PLAYER_SPAWN_X, consts::PLAYER_SPAWN_Y)
}

/// The six lane X offsets for a screen of the given width
#[inline]
pub fn lane_offsets(screen_width: f32) -> [i32; 6] {
    let [a, b, c, d, e] = consts::LANE_OFFSETS;
    [a, b, c, d, e, screen_width as i32 - consts::RIGHT_LANE_INSET]
}
