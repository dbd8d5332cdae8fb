//! Score-driven difficulty
//!
//! Every few points the squirrels come more often, barks come back slower,
//! and the scroll speed ceiling creeps up. Nothing ever eases off until the
//! next game.

use serde::{Deserialize, Serialize};

use crate::tuning::{DifficultyTuning, Tuning};

/// What a score milestone changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjustment {
    pub hazard_chance: u8,
    pub refill_period: u16,
    pub speed_ceiling: u8,
}

impl Adjustment {
    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }
}

/// Adjustment triggered by reaching `score` (the post-increment score)
pub fn adjustment_for(score: u16, tuning: &DifficultyTuning) -> Adjustment {
    let mut adj = Adjustment::default();
    if score == 0 {
        return adj;
    }
    if score % tuning.spawn_step == 0 {
        adj.hazard_chance = tuning.spawn_chance_delta;
        adj.refill_period = tuning.refill_period_delta;
    }
    if score % tuning.speed_step == 0 {
        adj.speed_ceiling = tuning.speed_delta;
    }
    adj
}

/// Spawn knobs for the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Chance out of 255 per tick
    pub hazard_chance: u8,
    pub collectible_chance: u8,
    /// Highest scroll speed a fresh entity can get
    pub speed_ceiling: u8,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hazard_chance: tuning.squirrel_spawn_chance,
            collectible_chance: tuning.ball_spawn_chance,
            speed_ceiling: tuning.max_scroll_speed,
        }
    }

    /// Apply the spawn side of an adjustment. The refill side belongs to the
    /// bark meter.
    pub fn apply(&mut self, adj: Adjustment) {
        self.hazard_chance = self.hazard_chance.saturating_add(adj.hazard_chance);
        self.speed_ceiling = self.speed_ceiling.saturating_add(adj.speed_ceiling);
    }
}
