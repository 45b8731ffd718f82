//! Save record text format
//!
//! ```text
//! <x> <y> <lives> <score>
//! <level tag>
//! <enemy count>
//! ```
//!
//! Readers only rely on whitespace between fields, not on the line breaks.

use std::str::{FromStr, SplitWhitespace};

use super::PersistError;
use crate::consts::{MAX_SAVED_ENEMIES, MAX_SAVED_LIVES};
use crate::sim::Level;

/// Everything a save keeps
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    pub x: f32,
    pub y: f32,
    pub lives: u32,
    pub score: i64,
    pub level: Level,
    pub enemy_count: usize,
}

impl SaveRecord {
    pub fn to_text(&self) -> String {
        format!(
            "{} {} {} {}\n{}\n{}\n",
            self.x,
            self.y,
            self.lives,
            self.score,
            self.level.tag(),
            self.enemy_count
        )
    }

    /// Parse a whole record; any missing, malformed or extra field is an error
    pub fn parse(text: &str) -> Result<Self, PersistError> {
        let mut fields = Fields(text.split_whitespace());

        let record = Self {
            x: fields.number("x")?,
            y: fields.number("y")?,
            lives: fields.number("lives")?,
            score: fields.number("score")?,
            level: {
                let tag = fields.next("level")?;
                Level::from_tag(tag).ok_or_else(|| PersistError::UnknownLevel {
                    tag: tag.to_string(),
                })?
            },
            enemy_count: fields.number("enemy count")?,
        };

        if let Some(token) = fields.0.next() {
            return Err(PersistError::TrailingData {
                token: token.to_string(),
            });
        }

        if record.enemy_count > MAX_SAVED_ENEMIES {
            return Err(PersistError::InvalidNumber {
                field: "enemy count",
                value: record.enemy_count.to_string(),
            });
        }
        if record.lives > MAX_SAVED_LIVES {
            return Err(PersistError::InvalidNumber {
                field: "lives",
                value: record.lives.to_string(),
            });
        }

        if !record.x.is_finite() || !record.y.is_finite() {
            return Err(PersistError::InvalidNumber {
                field: "position",
                value: format!("{} {}", record.x, record.y),
            });
        }

        Ok(record)
    }
}

struct Fields<'a>(SplitWhitespace<'a>);

impl<'a> Fields<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, PersistError> {
        self.0.next().ok_or(PersistError::MissingField { field })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, PersistError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| PersistError::InvalidNumber {
            field,
            value: token.to_string(),
        })
    }
}
