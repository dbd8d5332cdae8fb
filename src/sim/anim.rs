//! Sprite frame counters
//!
//! Each visual element owns its counter and advances it once per tick with
//! one of three rules: wrap, bounce, or the menu's one-shot throw.

use serde::{Deserialize, Serialize};

/// Loops `0..=max` forever
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapCounter {
    frame: u8,
    max: u8,
}

impl WrapCounter {
    pub const fn new(max: u8) -> Self {
        Self { frame: 0, max }
    }

    pub fn advance(&mut self) {
        self.frame = if self.frame >= self.max { 0 } else { self.frame + 1 };
    }

    #[inline]
    pub fn frame(&self) -> u8 {
        self.frame
    }
}

/// Plays `0..=max` forward then backward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BounceCounter {
    frame: u8,
    max: u8,
    forward: bool,
}

impl BounceCounter {
    pub const fn new(max: u8) -> Self {
        Self {
            frame: 0,
            max,
            forward: true,
        }
    }

    pub fn advance(&mut self) {
        if self.forward {
            self.frame = self.frame.saturating_add(1).min(self.max);
        } else {
            self.frame = self.frame.saturating_sub(1);
        }

        if self.frame >= self.max {
            self.forward = false;
        } else if self.frame == 0 {
            self.forward = true;
        }
    }

    #[inline]
    pub fn frame(&self) -> u8 {
        self.frame
    }
}

/// The menu's ball throw
///
/// Holding A winds the arm back frame by frame up to the wind-up frame;
/// holding past it latches the throw, after which the animation plays out on
/// its own. Letting go early unwinds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowAnimation {
    frame: u8,
    windup: u8,
    last: u8,
    ready: bool,
}

impl ThrowAnimation {
    pub const fn new(windup: u8, last: u8) -> Self {
        Self {
            frame: 0,
            windup,
            last,
            ready: false,
        }
    }

    pub fn advance(&mut self, held: bool) {
        if self.finished() {
            return;
        }
        if held {
            if self.frame < self.windup {
                self.frame += 1;
            } else {
                self.ready = true;
            }
        } else if self.ready {
            self.frame += 1;
        } else {
            self.frame = self.frame.saturating_sub(1);
        }
    }

    /// Throw is latched and will complete regardless of input
    #[inline]
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Final frame reached
    #[inline]
    pub fn finished(&self) -> bool {
        self.frame >= self.last
    }

    #[inline]
    pub fn frame(&self) -> u8 {
        self.frame
    }
}
