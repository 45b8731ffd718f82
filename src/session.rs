//! A running game: simulation, save slot and frame buffer together

use crate::persistence::SaveSlot;
use crate::renderer::{FrameBuffer, draw_frame};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, GameState, TickOutcome, tick};

/// Owns everything one game session needs
pub struct Session<F: FrameBuffer, S: SaveSlot> {
    pub state: GameState,
    pub settings: Settings,
    pub frame_buffer: F,
    pub slot: S,
    finished: bool,
}

impl<F: FrameBuffer, S: SaveSlot> Session<F, S> {
    pub fn new(settings: Settings, frame_buffer: F, slot: S) -> Self {
        log::info!(
            "New session: {}x{}, seed {}",
            settings.screen_width,
            settings.screen_height,
            settings.seed
        );
        Self {
            state: GameState::new(&settings),
            settings,
            frame_buffer,
            slot,
            finished: false,
        }
    }

    /// Simulate one frame and draw it. Once a frame returns `Quit` every
    /// later call is a no-op returning `Quit`.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> TickOutcome {
        if self.finished {
            return TickOutcome::Quit;
        }

        let outcome = tick(&mut self.state, input, dt, &mut self.slot);
        if outcome == TickOutcome::Quit {
            log::info!("Session ended after {} frames", self.state.time_frames);
            self.finished = true;
            return outcome;
        }

        draw_frame(&self.state, &mut self.frame_buffer);
        outcome
    }

    /// Events from the frames since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::persistence::MemorySlot;
    use crate::renderer::{RecordingFrameBuffer, Sprite};
    use crate::sim::GamePhase;

    fn session() -> Session<RecordingFrameBuffer, MemorySlot> {
        Session::new(
            Settings::default(),
            RecordingFrameBuffer::default(),
            MemorySlot::default(),
        )
    }

    #[test]
    fn test_every_frame_is_presented() {
        let mut session = session();
        for _ in 0..10 {
            session.frame(&FrameInput::default(), SIM_DT);
        }
        assert_eq!(session.frame_buffer.presented, 10);
    }

    #[test]
    fn test_play_draws_the_wave() {
        let mut session = session();
        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        session.frame(&confirm, SIM_DT);
        assert_eq!(session.state.phase, GamePhase::Ongoing);
        assert_eq!(
            session.frame_buffer.count(|s| matches!(s, Sprite::Enemy(_))),
            20
        );
    }

    #[test]
    fn test_quit_finishes_session() {
        let mut session = session();
        let escape = FrameInput {
            escape: true,
            ..Default::default()
        };
        assert_eq!(session.frame(&escape, SIM_DT), TickOutcome::Quit);
        assert!(session.is_finished());
        assert_eq!(session.frame_buffer.presented, 0);
        assert_eq!(session.frame(&FrameInput::default(), SIM_DT), TickOutcome::Quit);
        assert!(session.drain_events().contains(&GameEvent::QuitRequested));
    }
}
