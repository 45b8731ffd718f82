//! Phase and level progression
//!
//! The automatic transitions are a pure table keyed on the phase, the level,
//! whether the wave is empty and whether the player is dead. Input-driven
//! transitions (menu, pause, escape) live in `tick`.

use super::state::{GameEvent, GamePhase, GameState, Level};

/// Upper bound on chained transitions in one resolution
const MAX_CHAINED_TRANSITIONS: usize = 4;

/// Outcome of one table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to do
    Stay,
    /// Player destroyed while playing
    Lose,
    /// Wave cleared while playing
    Win,
    /// Celebrate over, seed the next level
    Advance(Level),
}

/// Automatic transition for a frame. The death check comes first, so a
/// player dying on the frame the wave empties loses.
pub fn resolve(phase: GamePhase, level: Level, wave_empty: bool, player_dead: bool) -> Transition {
    match (phase, wave_empty, player_dead) {
        (GamePhase::Ongoing, _, true) => Transition::Lose,
        (GamePhase::Ongoing, true, false) => Transition::Win,
        (GamePhase::Ongoing, false, false) => Transition::Stay,
        (GamePhase::Won, true, _) => match level.next() {
            Some(next) => Transition::Advance(next),
            None => Transition::Stay,
        },
        (GamePhase::Won, false, _) => Transition::Stay,
        (GamePhase::Start | GamePhase::Pause | GamePhase::Lost, _, _) => Transition::Stay,
    }
}

impl GameState {
    /// Apply automatic transitions until the table settles.
    ///
    /// Clearing a wave below the last level passes through `Won` and lands in
    /// `Ongoing` on the next level within the same resolution. Returns the
    /// transitions applied.
    pub fn resolve_phase(&mut self) -> Vec<Transition> {
        let mut applied = Vec::new();

        for _ in 0..MAX_CHAINED_TRANSITIONS {
            let transition = resolve(
                self.phase,
                self.level,
                self.wave_cleared(),
                self.player.is_dead,
            );
            match transition {
                Transition::Stay => break,
                Transition::Lose => {
                    self.events.push(GameEvent::PlayerDestroyed);
                    self.set_phase(GamePhase::Lost);
                }
                Transition::Win => {
                    log::info!("{} cleared", self.level.tag());
                    self.set_phase(GamePhase::Won);
                }
                Transition::Advance(next) => self.start_level(next),
            }
            applied.push(transition);
        }

        applied
    }
}
