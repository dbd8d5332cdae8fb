//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through [`RandomSource`]
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies beyond the input snapshot

pub mod anim;
pub mod bark;
pub mod collision;
pub mod difficulty;
pub mod pool;
pub mod rng;
pub mod rules;
pub mod scenery;
pub mod state;
pub mod tick;

pub use anim::{BounceCounter, ThrowAnimation, WrapCounter};
pub use bark::BarkMeter;
pub use collision::{Rect, bark_hitbox, body_hitbox, entity_hitbox};
pub use difficulty::{Adjustment, Difficulty, adjustment_for};
pub use pool::{Entity, EntityPool, Species};
pub use rng::{RandomSource, ScriptedRng, seeded};
pub use rules::resolve_collisions;
pub use scenery::Scenery;
pub use state::{GameEvent, GameState, MenuState, Player, Session};
pub use tick::{MenuOutcome, PlayOutcome, menu_tick, play_tick};
