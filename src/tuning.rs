//! Game balance knobs
//!
//! Everything a designer might tweak without touching code. Loaded from JSON
//! (missing fields fall back to the shipped defaults) and validated once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading tuning or settings files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Score-driven difficulty steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Every N points the squirrels get more frequent and barks slower to refill
    pub spawn_step: u16,
    pub spawn_chance_delta: u8,
    pub refill_period_delta: u16,
    /// Every N points the scroll speed ceiling rises
    pub speed_step: u16,
    pub speed_delta: u8,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            spawn_step: 10,
            spawn_chance_delta: 1,
            refill_period_delta: 20,
            speed_step: 25,
            speed_delta: 1,
        }
    }
}

/// All gameplay parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Dog ===
    /// Horizontal pixels per tick
    pub player_speed_x: i32,
    /// Vertical pixels per tick
    pub player_speed_y: i32,
    /// Left movement bound. Matches the status bar height on the shipped
    /// hardware build, so the dog cannot walk back to its x=0 start column.
    pub player_min_x: i32,

    // === Barks ===
    pub max_barks: u8,
    /// Ticks a bark stays active (the burst lasts one tick longer than this)
    pub bark_duration: u8,
    /// Ticks to regain one bark
    pub bark_refill_period: u16,

    // === Spawning ===
    /// Chance out of 255 per tick
    pub squirrel_spawn_chance: u8,
    pub ball_spawn_chance: u8,
    /// Initial upper bound of the random scroll speed
    pub max_scroll_speed: u8,

    // === Menu ===
    /// Throw frame at which holding A latches the throw
    pub throw_windup_frame: u8,

    // === Loss ===
    /// Ticks the screen stays frozen before retry is accepted
    pub loss_freeze_ticks: u8,
    /// Flash cycle length; the dog shows during the upper half
    pub loss_flash_period: u8,

    pub difficulty: DifficultyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed_x: 3,
            player_speed_y: 2,
            player_min_x: STATUS_BAR_HEIGHT,

            max_barks: 3,
            bark_duration: 10,
            bark_refill_period: 120,

            squirrel_spawn_chance: 3,
            ball_spawn_chance: 4,
            max_scroll_speed: 2,

            throw_windup_frame: 16,

            loss_freeze_ticks: 60,
            loss_flash_period: 10,

            difficulty: DifficultyTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall timers or break the rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        if self.max_barks == 0 {
            return invalid("max_barks", "must be at least 1");
        }
        if self.bark_refill_period == 0 {
            return invalid("bark_refill_period", "must be non-zero");
        }
        if self.max_scroll_speed == 0 {
            return invalid("max_scroll_speed", "must be at least 1");
        }
        if self.loss_flash_period == 0 {
            return invalid("loss_flash_period", "must be non-zero");
        }
        if self.throw_windup_frame >= BALL_THROW_MAX_FRAME {
            return invalid("throw_windup_frame", "must be below the last throw frame");
        }
        if self.difficulty.spawn_step == 0 {
            return invalid("difficulty.spawn_step", "must be non-zero");
        }
        if self.difficulty.speed_step == 0 {
            return invalid("difficulty.speed_step", "must be non-zero");
        }
        let max_x = SCREEN_WIDTH - DOG_WIDTH - BARK_WIDTH;
        if self.player_min_x > max_x {
            return invalid("player_min_x", "leaves no room for the dog and its bark");
        }
        if self.player_speed_x < 0 || self.player_speed_y < 0 {
            return invalid("player_speed", "must not be negative");
        }
        Ok(())
    }
}
