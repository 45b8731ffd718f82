//! Menu selection state
//!
//! The menu itself is drawn elsewhere; the simulation only tracks which
//! entry is highlighted and rate-limits navigation.

use serde::{Deserialize, Serialize};

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuChoice {
    #[default]
    Play,
    Load,
    Save,
    Quit,
}

impl MenuChoice {
    const ORDER: [MenuChoice; 4] = [
        MenuChoice::Play,
        MenuChoice::Load,
        MenuChoice::Save,
        MenuChoice::Quit,
    ];

    /// Integer code: 0 = Play, 1 = Load, 2 = Save, 3 = Quit
    pub fn code(self) -> u8 {
        self as u8
    }

    fn offset(self, delta: i8) -> Self {
        let len = Self::ORDER.len() as i8;
        let index = (self.code() as i8 + delta).rem_euclid(len);
        Self::ORDER[index as usize]
    }
}

/// Highlighted entry plus the navigation cooldown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    pub choice: MenuChoice,
    /// Frames since the last accepted navigation
    pub cooldown: u32,
}

impl Menu {
    /// Count one menu frame
    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_add(1);
    }

    /// Move the highlight up, if the cooldown allows. Wraps around.
    pub fn navigate_up(&mut self, cooldown_frames: u32) -> bool {
        self.navigate(-1, cooldown_frames)
    }

    /// Move the highlight down, if the cooldown allows. Wraps around.
    pub fn navigate_down(&mut self, cooldown_frames: u32) -> bool {
        self.navigate(1, cooldown_frames)
    }

    fn navigate(&mut self, delta: i8, cooldown_frames: u32) -> bool {
        if self.cooldown < cooldown_frames {
            return false;
        }
        self.choice = self.choice.offset(delta);
        self.cooldown = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<u8> = MenuChoice::ORDER.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
        assert_eq!(MenuChoice::Save.code(), 2);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu {
            cooldown: 100,
            ..Default::default()
        };
        assert!(menu.navigate_up(0));
        assert_eq!(menu.choice, MenuChoice::Quit);
        assert!(menu.navigate_down(0));
        assert_eq!(menu.choice, MenuChoice::Play);
    }

    #[test]
    fn test_navigation_cooldown() {
        let mut menu = Menu {
            cooldown: 20,
            ..Default::default()
        };
        assert!(menu.navigate_down(20));
        assert_eq!(menu.choice, MenuChoice::Load);

        // Held key: ignored until 20 more frames pass
        for _ in 0..19 {
            menu.tick_cooldown();
            assert!(!menu.navigate_down(20));
        }
        menu.tick_cooldown();
        assert!(menu.navigate_down(20));
        assert_eq!(menu.choice, MenuChoice::Save);
    }
}
