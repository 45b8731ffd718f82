//! Per-frame simulation step
//!
//! Core game loop: explosion clock, input, phase resolution, movement,
//! collisions and dead-enemy pruning, in that order.

use glam::Vec2;

use super::autopilot::autopilot_input;
use super::collision::check_collision;
use super::menu::MenuChoice;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::persistence::SaveSlot;

/// Decoded input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pause key
    pub pause: bool,
    /// Escape key, held state. Only the press acts.
    pub escape: bool,
    /// Enter key (menu confirm)
    pub confirm: bool,
    /// Captured mouse movement; not used by the simulation
    pub mouse_delta: Vec2,
    /// Demo mode - the autopilot plays instead of this input
    pub autopilot: bool,
}

impl FrameInput {
    /// Held directions as a vector, y pointing down the screen
    pub fn heading(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Whether the session goes on after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    slot: &mut dyn SaveSlot,
) -> TickOutcome {
    let input = if input.autopilot {
        autopilot_input(state)
    } else {
        input.clone()
    };
    let input = &input;

    state.time_frames += 1;

    let escape_pressed = input.escape && !state.escape_held;
    state.escape_held = input.escape;

    advance_explosions(state, dt);

    if handle_input(state, input, escape_pressed, slot) == TickOutcome::Quit {
        state.events.push(GameEvent::QuitRequested);
        return TickOutcome::Quit;
    }

    state.resolve_phase();

    if state.phase == GamePhase::Ongoing {
        update_entities(state, input, dt);

        if check_collision(&mut state.player, &mut state.lives_track, &mut state.enemies) {
            state.score -= COLLISION_PENALTY;
            state.events.push(GameEvent::PlayerHit {
                lives_left: state.player.lives,
            });
        }
    }

    remove_dead(state);

    TickOutcome::Continue
}

/// Step explosion animations on the 70 ms clock.
///
/// The clock only runs while something is exploding, so a new explosion
/// always gets a full first frame.
pub fn advance_explosions(state: &mut GameState, dt: f32) {
    let anything_exploding =
        state.player.is_exploding() || state.enemies.iter().any(|e| e.is_exploding());
    if !anything_exploding {
        state.explosion_clock = 0.0;
        return;
    }

    state.explosion_clock += dt;
    while state.explosion_clock >= EXPLOSION_STEP_SECS {
        state.explosion_clock -= EXPLOSION_STEP_SECS;
        state.player.advance_explosion();
        for enemy in &mut state.enemies {
            enemy.advance_explosion();
        }
    }
}

/// Menu, pause and escape handling. `escape_pressed` is true only on the
/// frame Escape goes down, so one press makes one transition.
fn handle_input(
    state: &mut GameState,
    input: &FrameInput,
    escape_pressed: bool,
    slot: &mut dyn SaveSlot,
) -> TickOutcome {
    state.menu.tick_cooldown();

    match state.phase {
        GamePhase::Start | GamePhase::Pause => {
            if escape_pressed {
                return TickOutcome::Quit;
            }

            let cooldown = state.menu_cooldown_frames;
            if input.up {
                state.menu.navigate_up(cooldown);
            }
            if input.down {
                state.menu.navigate_down(cooldown);
            }

            if input.confirm {
                match state.menu.choice {
                    MenuChoice::Play => state.set_phase(GamePhase::Ongoing),
                    MenuChoice::Load => load_game(state, slot),
                    MenuChoice::Save => save_game(state, slot),
                    MenuChoice::Quit => return TickOutcome::Quit,
                }
            }
        }
        GamePhase::Ongoing => {
            if input.pause || escape_pressed {
                state.set_phase(GamePhase::Pause);
            }
        }
        GamePhase::Won | GamePhase::Lost => {
            if escape_pressed {
                state.set_phase(GamePhase::Start);
            }
        }
    }

    TickOutcome::Continue
}

fn save_game(state: &mut GameState, slot: &mut dyn SaveSlot) {
    match slot.save(&state.save_record()) {
        Ok(()) => state.events.push(GameEvent::Saved),
        Err(e) => {
            log::warn!("Save failed: {e}");
            state.events.push(GameEvent::SaveFailed);
        }
    }
}

fn load_game(state: &mut GameState, slot: &mut dyn SaveSlot) {
    match slot.load() {
        Ok(record) => {
            state.apply_save(&record);
            state.events.push(GameEvent::Loaded);
        }
        Err(e) => {
            log::warn!("Load failed, keeping current game: {e}");
            state.events.push(GameEvent::LoadFailed);
        }
    }
}

/// Scoring, steering and movement for an ongoing frame
fn update_entities(state: &mut GameState, input: &FrameInput, dt: f32) {
    let player = &mut state.player;
    if !player.is_dead {
        if !player.is_exploding() {
            state.score_frames += 1;
            if state.score_frames >= SCORE_CADENCE_FRAMES {
                state.score_frames = 0;
                state.score += 1;
            }
        }
        player.steer(input.heading());
        player.update(dt, state.screen);
    }

    let escape_line = state.screen.y - BOTTOM_MARGIN;
    for enemy in &mut state.enemies {
        enemy.update(dt);
        if !enemy.is_dead && enemy.bottom() >= escape_line {
            enemy.is_dead = true;
            state.events.push(GameEvent::EnemyEscaped);
        }
    }
}

/// Start the final explosion once lives run out, and drop at most one dead
/// enemy. Several dead enemies take several frames to clear.
fn remove_dead(state: &mut GameState) {
    let player = &mut state.player;
    if player.lives == 0 && !player.is_exploding() && !player.is_dead {
        log::info!("Out of lives");
        player.explode();
    }

    if let Some(index) = state.enemies.iter().position(|e| e.is_dead) {
        state.enemies.remove(index);
    }
}
