//! Demo mode - the simulation plays itself
//!
//! Picks Play from the menu and sidesteps the nearest car coming down the
//! player's column. Not clever, but it survives long enough to show off the
//! level progression.

use super::menu::MenuChoice;
use super::state::{GamePhase, GameState};
use super::tick::FrameInput;

/// How far above the player (pixels) an enemy counts as a threat
const LOOKAHEAD: f32 = 420.0;
/// Extra horizontal clearance kept from enemies
const CLEARANCE: f32 = 24.0;

/// Input the autopilot would give this frame
pub fn autopilot_input(state: &GameState) -> FrameInput {
    let mut input = FrameInput::default();

    match state.phase {
        GamePhase::Start | GamePhase::Pause => {
            if state.menu.choice == MenuChoice::Play {
                input.confirm = true;
            } else {
                input.up = true;
            }
        }
        GamePhase::Ongoing => {
            let player = &state.player;
            let threat = state
                .enemies
                .iter()
                .filter(|e| !e.is_dead && !e.is_exploding())
                .filter(|e| {
                    let reach = (player.size.x + e.size.x) / 2.0 + CLEARANCE;
                    let ahead = player.pos.y - e.pos.y;
                    (e.pos.x - player.pos.x).abs() < reach && ahead > -e.size.y && ahead < LOOKAHEAD
                })
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

            if let Some(threat) = threat {
                let half = player.size.x / 2.0;
                let room_left = player.pos.x - half > CLEARANCE;
                let room_right = player.pos.x + half < state.screen.x - CLEARANCE;
                let prefer_left = threat.pos.x >= player.pos.x;

                if (prefer_left && room_left) || !room_right {
                    input.left = true;
                } else {
                    input.right = true;
                }
            }
        }
        GamePhase::Won | GamePhase::Lost => {}
    }

    input
}
