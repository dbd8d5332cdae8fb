//! Bark stock and bark timing
//!
//! The dog holds a few barks. Each bark scares off squirrels in front of it
//! for a short burst; spent barks trickle back on a countdown whose period
//! grows as the game gets harder.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarkMeter {
    stock: u8,
    max: u8,
    /// Ticks until the next bark comes back
    refill_countdown: u16,
    refill_period: u16,
    /// Ticks left in the active bark (0 = not barking)
    active_ticks: u8,
    /// Burst length in ticks
    burst: u8,
}

impl BarkMeter {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            stock: tuning.max_barks,
            max: tuning.max_barks,
            refill_countdown: tuning.bark_refill_period,
            refill_period: tuning.bark_refill_period,
            active_ticks: 0,
            burst: tuning.bark_duration.saturating_add(1),
        }
    }

    /// Spend a bark if one is available and none is in progress
    pub fn try_start(&mut self) -> bool {
        if self.is_active() || self.stock == 0 {
            return false;
        }
        self.stock -= 1;
        self.active_ticks = self.burst;
        true
    }

    /// Count the active bark down. Returns true on the tick it ends.
    pub fn tick_burst(&mut self) -> bool {
        if self.active_ticks == 0 {
            return false;
        }
        self.active_ticks -= 1;
        self.active_ticks == 0
    }

    /// Count toward the next bark while below max. Returns true when one is
    /// regained.
    pub fn regenerate(&mut self) -> bool {
        if self.stock >= self.max {
            return false;
        }
        self.refill_countdown = self.refill_countdown.saturating_sub(1);
        if self.refill_countdown == 0 {
            self.refill_countdown = self.refill_period;
            self.stock += 1;
            return true;
        }
        false
    }

    /// Slow down regeneration (difficulty)
    pub fn raise_refill_period(&mut self, delta: u16) {
        self.refill_period = self.refill_period.saturating_add(delta);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active_ticks > 0
    }

    /// Ticks elapsed since the active bark started
    pub fn burst_elapsed(&self) -> u8 {
        if self.is_active() {
            self.burst - self.active_ticks
        } else {
            0
        }
    }

    #[inline]
    pub fn stock(&self) -> u8 {
        self.stock
    }

    #[inline]
    pub fn max(&self) -> u8 {
        self.max
    }

    #[inline]
    pub fn refill_period(&self) -> u16 {
        self.refill_period
    }

    #[inline]
    pub fn refill_countdown(&self) -> u16 {
        self.refill_countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn meter() -> BarkMeter {
        BarkMeter::new(&Tuning::default())
    }

    #[test]
    fn test_bark_consumes_stock_and_lasts_eleven_ticks() {
        let mut m = meter();
        assert!(m.try_start());
        assert_eq!(m.stock(), 2);

        let mut active = 0;
        while m.is_active() {
            active += 1;
            m.tick_burst();
        }
        assert_eq!(active, 11);
    }

    #[test]
    fn test_no_bark_while_active_or_empty() {
        let mut m = meter();
        assert!(m.try_start());
        assert!(!m.try_start(), "already barking");
        assert_eq!(m.stock(), 2);

        while m.is_active() {
            m.tick_burst();
        }
        assert!(m.try_start());
        while m.is_active() {
            m.tick_burst();
        }
        assert!(m.try_start());
        while m.is_active() {
            m.tick_burst();
        }
        assert_eq!(m.stock(), 0);
        assert!(!m.try_start());
    }

    #[test]
    fn test_regenerates_after_period() {
        let mut m = meter();
        m.try_start();

        for _ in 0..119 {
            assert!(!m.regenerate());
        }
        assert!(m.regenerate());
        assert_eq!(m.stock(), 3);
        assert_eq!(m.refill_countdown(), 120);

        // full stock: countdown frozen
        m.regenerate();
        assert_eq!(m.refill_countdown(), 120);
    }

    #[test]
    fn test_raised_period_applies_on_next_reload() {
        let mut m = meter();
        m.try_start();
        m.raise_refill_period(20);
        for _ in 0..120 {
            m.regenerate();
        }
        assert_eq!(m.stock(), 3);
        assert_eq!(m.refill_countdown(), 140);
    }

    proptest! {
        #[test]
        fn prop_stock_stays_in_bounds(ops in proptest::collection::vec(0u8..3, 0..600)) {
            let mut m = meter();
            for op in ops {
                let before = m.stock();
                match op {
                    0 => {
                        let started = m.try_start();
                        if started {
                            prop_assert_eq!(m.stock(), before - 1);
                        } else {
                            prop_assert_eq!(m.stock(), before);
                        }
                    }
                    1 => {
                        m.tick_burst();
                        prop_assert_eq!(m.stock(), before);
                    }
                    _ => {
                        let regained = m.regenerate();
                        prop_assert_eq!(m.stock(), before + regained as u8);
                    }
                }
                prop_assert!(m.stock() <= m.max());
            }
        }
    }
}
