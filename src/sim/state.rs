//! Game state and core simulation types
//!
//! One `GameState` owns the whole entity graph for a session. Everything a
//! frame mutates lives here, including the counters that pace scoring and
//! explosion animation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Player};
use super::menu::Menu;
use super::spawn::{SpawnParams, spawn_wave};
use crate::Settings;
use crate::consts::*;
use crate::persistence::SaveRecord;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, nothing simulated
    Start,
    /// Active gameplay
    Ongoing,
    /// Frozen with the menu overlaid
    Pause,
    /// Wave cleared; terminal after the last level
    Won,
    /// Player destroyed
    Lost,
}

/// The five levels, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Level1,
        Level::Level2,
        Level::Level3,
        Level::Level4,
        Level::Level5,
    ];

    /// Zero-based position in play order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tag written to the save file
    pub fn tag(self) -> &'static str {
        match self {
            Level::Level1 => "level1",
            Level::Level2 => "level2",
            Level::Level3 => "level3",
            Level::Level4 => "level4",
            Level::Level5 => "level5",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.tag() == tag)
    }

    /// Following level, `None` after the last
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

/// One remaining life, drawn as a heart on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeToken {
    pub pos: Vec2,
}

/// HUD tokens for `lives` remaining lives
pub fn lives_track(lives: u32) -> Vec<LifeToken> {
    let origin = Vec2::from(LIFE_TOKEN_ORIGIN);
    (0..lives)
        .map(|i| LifeToken {
            pos: origin + Vec2::new(i as f32 * LIFE_TOKEN_SPACING, 0.0),
        })
        .collect()
}

/// Notable things that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    LevelStarted(Level),
    PlayerHit { lives_left: u32 },
    PlayerDestroyed,
    EnemyEscaped,
    Saved,
    SaveFailed,
    Loaded,
    LoadFailed,
    QuitRequested,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub level: Level,
    pub player: Player,
    /// Current wave in spawn order
    pub enemies: Vec<Enemy>,
    /// One token per remaining life
    pub lives_track: Vec<LifeToken>,
    pub score: i64,
    /// Ongoing frames since the last score point
    pub score_frames: u32,
    /// Seconds accumulated towards the next explosion frame
    pub explosion_clock: f32,
    pub menu: Menu,
    /// Frames simulated since the session started
    pub time_frames: u64,
    pub screen: Vec2,
    pub menu_cooldown_frames: u32,
    /// Escape was down last frame
    pub escape_held: bool,
    pub rng: Pcg32,
    /// Events from the current frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session at the main menu with the first wave laid out
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self {
            phase: GamePhase::Start,
            level: Level::Level1,
            player: Player::new(0),
            enemies: Vec::new(),
            lives_track: Vec::new(),
            score: 0,
            score_frames: 0,
            explosion_clock: 0.0,
            menu: Menu::default(),
            time_frames: 0,
            screen: settings.screen(),
            menu_cooldown_frames: settings.menu_cooldown_frames,
            escape_held: false,
            rng: Pcg32::seed_from_u64(settings.seed),
            events: Vec::new(),
        };

        state.set_lives(settings.starting_lives);
        state.spawn(SpawnParams::for_level(Level::Level1));
        state
    }

    /// Replace the lives track and the player's life count together
    pub fn set_lives(&mut self, lives: u32) {
        self.player.lives = lives;
        self.lives_track = lives_track(lives);
    }

    /// Lay out a new wave, appended to the current one
    pub fn spawn(&mut self, params: SpawnParams) {
        let wave = spawn_wave(&mut self.rng, &params, self.screen);
        self.enemies.extend(wave);
    }

    pub fn wave_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }

    /// Seed the level's wave, put the player back at spawn and resume play
    pub fn start_level(&mut self, level: Level) {
        self.spawn(SpawnParams::for_level(level));
        self.player.reset_to_spawn();
        self.level = level;
        self.events.push(GameEvent::LevelStarted(level));
        log::info!("Starting {} with {} enemies", level.tag(), self.enemies.len());
        self.set_phase(GamePhase::Ongoing);
    }

    /// Snapshot for the save slot
    pub fn save_record(&self) -> SaveRecord {
        SaveRecord {
            x: self.player.pos.x,
            y: self.player.pos.y,
            lives: self.player.lives,
            score: self.score,
            level: self.level,
            enemy_count: self.enemies.len(),
        }
    }

    /// Replace the session with a restored save.
    ///
    /// The wave is re-laid with the load defaults rather than the restored
    /// level's tuning; only the enemy count survives a save.
    pub fn apply_save(&mut self, record: &SaveRecord) {
        self.enemies.clear();
        self.lives_track.clear();

        self.player.pos = Vec2::new(record.x, record.y);
        self.player.vel = Vec2::ZERO;
        self.player.explosion = None;
        self.player.is_dead = false;
        self.score = record.score;
        self.score_frames = 0;
        self.set_lives(record.lives);

        self.spawn(SpawnParams::load_default(record.enemy_count));
        self.level = record.level;
        self.set_phase(GamePhase::Ongoing);
        log::info!(
            "Restored {} with {} enemies, {} lives, score {}",
            record.level.tag(),
            self.enemies.len(),
            record.lives,
            record.score
        );
    }

    /// Take this frame's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
