//! Grass tufts scrolling under the dog
//!
//! Pure decoration: fixed layout, no randomness, no collisions.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::anim::WrapCounter;
use crate::consts::*;

pub const TUFT_COUNT: usize = 8;

/// Rows the tufts sit on, staggered so they don't line up
const TUFT_ROWS: [i32; TUFT_COUNT] = [14, 41, 27, 56, 20, 49, 33, 60];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenery {
    tufts: [IVec2; TUFT_COUNT],
    sway: WrapCounter,
}

impl Default for Scenery {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenery {
    pub fn new() -> Self {
        let spacing = SCREEN_WIDTH / TUFT_COUNT as i32;
        let mut tufts = [IVec2::ZERO; TUFT_COUNT];
        for (i, tuft) in tufts.iter_mut().enumerate() {
            *tuft = IVec2::new(i as i32 * spacing + spacing / 2, TUFT_ROWS[i]);
        }
        Self {
            tufts,
            sway: WrapCounter::new(GRASS_MAX_FRAME),
        }
    }

    /// Scroll one pixel left, wrapping tufts that leave the screen
    pub fn advance(&mut self) {
        for tuft in &mut self.tufts {
            tuft.x -= 1;
            if tuft.x < -GRASS_WIDTH {
                tuft.x += SCREEN_WIDTH + GRASS_WIDTH;
            }
        }
        self.sway.advance();
    }

    pub fn tufts(&self) -> &[IVec2] {
        &self.tufts
    }

    pub fn frame(&self) -> u8 {
        self.sway.frame()
    }
}
