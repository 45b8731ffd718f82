//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded; one `GameState` owns every entity
//! - Seeded RNG only, so a seed reproduces a session
//! - Stable iteration order (wave spawn order)
//! - No rendering or file system dependencies; saving goes through `SaveSlot`

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod menu;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod transition;

pub use autopilot::autopilot_input;
pub use collision::{Aabb, check_collision};
pub use entity::{Enemy, EnemyKind, Explosion, ExplosionKind, PLAYER_SIZE, Player};
pub use menu::{Menu, MenuChoice};
pub use spawn::{SpawnParams, enemy_kind_for_index, spawn_wave};
pub use state::{GameEvent, GamePhase, GameState, Level, LifeToken, lives_track};
pub use tick::{FrameInput, TickOutcome, advance_explosions, tick};
pub use transition::{Transition, resolve};
