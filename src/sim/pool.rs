//! Fixed-capacity entity pools
//!
//! One pool per species. Slots never move, so a slot index is a stable
//! handle for the lifetime of the session. Dead slots keep stale data that
//! nothing reads.

use std::ops::Range;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;

/// The two kinds of scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    /// Squirrel: touching it ends the run, a bark scares it off
    Hazard,
    /// Ball: fetching it scores a point
    Collectible,
}

impl Species {
    /// Collision footprint
    pub fn size(self) -> IVec2 {
        match self {
            Species::Hazard => IVec2::new(SQUIRREL_WIDTH, SQUIRREL_HEIGHT),
            Species::Collectible => IVec2::new(BALL_WIDTH, BALL_HEIGHT),
        }
    }
}

/// One squirrel or ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub alive: bool,
    pub pos: IVec2,
    /// Pixels moved left per tick
    pub speed: u8,
}

/// Fixed slot array with first-fit allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPool {
    slots: [Entity; POOL_CAPACITY],
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            slots: [Entity::default(); POOL_CAPACITY],
        }
    }

    /// Bring the lowest-index dead slot to life at `spawn_x`
    ///
    /// Row and speed are drawn only when a slot is free, so a saturated pool
    /// leaves both the pool and the random stream untouched.
    pub fn try_resurrect(
        &mut self,
        spawn_x: i32,
        y_range: Range<i32>,
        speed_range: Range<i32>,
        rng: &mut impl RandomSource,
    ) -> Option<usize> {
        let index = self.slots.iter().position(|e| !e.alive)?;

        let y = rng.range(y_range.start, y_range.end);
        let speed = rng.range(speed_range.start, speed_range.end);

        self.slots[index] = Entity {
            alive: true,
            pos: IVec2::new(spawn_x, y),
            speed: speed.clamp(1, u8::MAX as i32) as u8,
        };
        Some(index)
    }

    /// Scroll every live entity left by its speed and recycle the ones that
    /// left the screen. Returns how many were recycled.
    pub fn advance(&mut self, offscreen_x: i32) -> usize {
        let mut recycled = 0;
        for entity in self.slots.iter_mut().filter(|e| e.alive) {
            entity.pos.x -= entity.speed as i32;
            if entity.pos.x < offscreen_x {
                entity.alive = false;
                recycled += 1;
            }
        }
        recycled
    }

    /// Mark a slot dead immediately
    pub fn kill_at(&mut self, index: usize) {
        if let Some(entity) = self.slots.get_mut(index) {
            entity.alive = false;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    /// All slots in index order, dead ones included
    pub fn slots(&self) -> &[Entity] {
        &self.slots
    }

    /// Live entities with their slot index, in index order
    pub fn live(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.alive)
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|e| e.alive).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|e| e.alive)
    }

    pub const fn capacity(&self) -> usize {
        POOL_CAPACITY
    }

    /// Place an entity directly (scenario setup)
    pub fn set(&mut self, index: usize, entity: Entity) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = entity;
        }
    }
}
