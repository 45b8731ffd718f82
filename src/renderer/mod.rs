//! Frame buffer seam
//!
//! The simulation never touches pixels. Each frame it resets a frame buffer,
//! asks it to draw sprites at positions, and presents it. What a sprite looks
//! like is up to the implementation.

pub mod recording;

pub use recording::{DrawCall, RecordingFrameBuffer};

use glam::Vec2;

use crate::sim::{EnemyKind, GamePhase, GameState, Level, MenuChoice};

/// Everything the game can ask to be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    Player,
    Enemy(EnemyKind),
    /// Explosion animation frame in place of a vehicle
    Explosion(u8),
    LifeToken,
    Menu(MenuChoice),
    Score(i64),
    LevelBanner(Level),
    WonScreen,
    LostScreen,
}

/// Drawing surface the game presents into once per frame
pub trait FrameBuffer {
    /// Clear for a new frame
    fn reset(&mut self);
    /// Draw a sprite centred at `pos`
    fn draw(&mut self, sprite: Sprite, pos: Vec2);
    /// Show the finished frame
    fn present(&mut self);
}

/// HUD positions
const SCORE_POS: Vec2 = Vec2::new(95.0, 100.0);
const LEVEL_BANNER_POS: Vec2 = Vec2::new(80.0, 230.0);
const MENU_OFFSET_Y: f32 = -200.0;
const SCORE_BELOW_BANNER: f32 = 100.0;

/// Draw one frame of the current state
pub fn draw_frame(state: &GameState, fb: &mut dyn FrameBuffer) {
    let center = state.screen / 2.0;

    fb.reset();

    match state.phase {
        GamePhase::Start => {
            fb.draw(Sprite::Menu(state.menu.choice), center + Vec2::new(0.0, MENU_OFFSET_Y));
        }
        GamePhase::Pause => {
            fb.draw(Sprite::Menu(state.menu.choice), center + Vec2::new(0.0, MENU_OFFSET_Y));
            draw_hud(state, fb);
        }
        GamePhase::Ongoing => {
            draw_hud(state, fb);
            draw_vehicles(state, fb);
        }
        GamePhase::Lost => {
            fb.draw(Sprite::Score(state.score), center + Vec2::new(0.0, SCORE_BELOW_BANNER));
            fb.draw(Sprite::LostScreen, center);
        }
        GamePhase::Won => {
            if state.level == Level::Level5 {
                fb.draw(Sprite::Score(state.score), center + Vec2::new(0.0, SCORE_BELOW_BANNER));
                fb.draw(Sprite::WonScreen, center);
            }
        }
    }

    fb.present();
}

fn draw_hud(state: &GameState, fb: &mut dyn FrameBuffer) {
    fb.draw(Sprite::Score(state.score), SCORE_POS);
    for token in &state.lives_track {
        fb.draw(Sprite::LifeToken, token.pos);
    }
    fb.draw(Sprite::LevelBanner(state.level), LEVEL_BANNER_POS);
}

fn draw_vehicles(state: &GameState, fb: &mut dyn FrameBuffer) {
    let player = &state.player;
    if !player.is_dead {
        let sprite = match player.explosion {
            Some(explosion) => Sprite::Explosion(explosion.frame),
            None => Sprite::Player,
        };
        fb.draw(sprite, player.pos);
    }

    for enemy in state.enemies.iter().filter(|e| !e.is_dead) {
        let sprite = match enemy.explosion {
            Some(explosion) => Sprite::Explosion(explosion.frame),
            None => Sprite::Enemy(enemy.kind),
        };
        fb.draw(sprite, enemy.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    fn drawn(state: &GameState) -> Vec<Sprite> {
        let mut fb = RecordingFrameBuffer::default();
        draw_frame(state, &mut fb);
        assert_eq!(fb.presented, 1);
        fb.calls.iter().map(|c| c.sprite).collect()
    }

    #[test]
    fn test_start_shows_menu_only() {
        let state = GameState::new(&Settings::default());
        assert_eq!(drawn(&state), vec![Sprite::Menu(MenuChoice::Play)]);
    }

    #[test]
    fn test_ongoing_draws_hud_and_wave() {
        let mut state = GameState::new(&Settings::default());
        state.set_phase(GamePhase::Ongoing);
        let sprites = drawn(&state);

        let tokens = sprites.iter().filter(|s| **s == Sprite::LifeToken).count();
        assert_eq!(tokens, 3);
        assert!(sprites.contains(&Sprite::Player));
        assert!(sprites.contains(&Sprite::LevelBanner(Level::Level1)));
        let vehicles = sprites
            .iter()
            .filter(|s| matches!(s, Sprite::Enemy(_)))
            .count();
        assert_eq!(vehicles, 20);
    }

    #[test]
    fn test_dead_enemies_not_drawn() {
        let mut state = GameState::new(&Settings::default());
        state.set_phase(GamePhase::Ongoing);
        state.enemies[0].is_dead = true;
        state.enemies[1].explode();
        let sprites = drawn(&state);

        let vehicles = sprites
            .iter()
            .filter(|s| matches!(s, Sprite::Enemy(_)))
            .count();
        assert_eq!(vehicles, 18);
        assert!(sprites.contains(&Sprite::Explosion(0)));
    }

    #[test]
    fn test_won_screen_only_after_last_level() {
        let mut state = GameState::new(&Settings::default());
        state.set_phase(GamePhase::Won);
        assert!(drawn(&state).is_empty());

        state.level = Level::Level5;
        assert!(drawn(&state).contains(&Sprite::WonScreen));
    }
}
