//! Button state for a single tick
//!
//! Level queries ("is Up held") drive movement; edge queries ("was B just
//! pressed") drive mode changes and discrete actions.

use serde::{Deserialize, Serialize};

/// A physical button on the handheld
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::A,
        Button::B,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of buttons packed into one byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);

    pub fn from_slice(buttons: &[Button]) -> Self {
        buttons.iter().fold(Self::NONE, |set, &b| set.with(b))
    }

    #[must_use]
    pub fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons in `self` that are not in `other`
    #[must_use]
    pub fn difference(self, other: Buttons) -> Self {
        Self(self.0 & !other.0)
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        Self::NONE.with(button)
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Buttons currently down
    pub held: Buttons,
    /// Buttons that went down this tick
    pub pressed: Buttons,
}

impl TickInput {
    /// Input where `buttons` are held and were all pressed this tick
    pub fn press(buttons: impl Into<Buttons>) -> Self {
        let buttons = buttons.into();
        Self {
            held: buttons,
            pressed: buttons,
        }
    }

    /// Input where `buttons` are held since an earlier tick
    pub fn hold(buttons: impl Into<Buttons>) -> Self {
        Self {
            held: buttons.into(),
            pressed: Buttons::NONE,
        }
    }

    #[inline]
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(button)
    }

    #[inline]
    pub fn just_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

/// Derives press edges from consecutive raw button samples
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    previous: Buttons,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's raw sample and get the full snapshot back
    pub fn sample(&mut self, held: Buttons) -> TickInput {
        let pressed = held.difference(self.previous);
        self.previous = held;
        TickInput { held, pressed }
    }
}
