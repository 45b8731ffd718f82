//! Frame buffer that records draw calls instead of drawing

use glam::Vec2;

use super::{FrameBuffer, Sprite};

/// One recorded `draw`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub sprite: Sprite,
    pub pos: Vec2,
}

/// Keeps the draw calls of the frame in progress
#[derive(Debug, Clone, Default)]
pub struct RecordingFrameBuffer {
    pub calls: Vec<DrawCall>,
    /// Frames presented so far
    pub presented: u64,
}

impl RecordingFrameBuffer {
    /// How many sprites matching `pred` are in the current frame
    pub fn count(&self, pred: impl Fn(&Sprite) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(&c.sprite)).count()
    }
}

impl FrameBuffer for RecordingFrameBuffer {
    fn reset(&mut self) {
        self.calls.clear();
    }

    fn draw(&mut self, sprite: Sprite, pos: Vec2) {
        self.calls.push(DrawCall { sprite, pos });
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
