//! Axis-aligned hit boxes
//!
//! Everything on screen is a sprite, so every collision is a rectangle
//! overlap test in integer pixels.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::pool::Species;
use crate::consts::*;

/// A rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// The dog's body, a pixel inside its sprite on every side so grazes don't count
pub fn body_hitbox(dog: IVec2) -> Rect {
    Rect::new(dog.x + 1, dog.y + 1, DOG_WIDTH - 2, DOG_HEIGHT - 2)
}

/// The area a bark scares squirrels out of, in front of and above the snout
pub fn bark_hitbox(dog: IVec2) -> Rect {
    Rect::new(
        dog.x + BARK_OFFSET_X,
        dog.y + BARK_HIT_OFFSET_Y,
        BARK_WIDTH,
        BARK_HEIGHT + 2,
    )
}

/// Footprint of a squirrel or ball at `pos`
pub fn entity_hitbox(species: Species, pos: IVec2) -> Rect {
    let size = species.size();
    Rect::new(pos.x, pos.y, size.x, size.y)
}
