//! Fetch Frenzy - a dog-fetch arcade game for a 128x64 handheld screen
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, rules, difficulty, timers)
//! - `game`: Mode state machine driving the simulation once per tick
//! - `renderer`: Drawing collaborator interface and scene composition
//! - `platform`: Button snapshot and edge tracking
//! - `audio`: Fire-and-forget sound cues
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Game, GameMode};
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
///
/// These describe the device and the sprite assets and never change at
/// runtime. Gameplay balance lives in [`Tuning`].
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;
    /// Score/bark bar along the top edge
    pub const STATUS_BAR_HEIGHT: i32 = 8;

    /// Slots per entity species
    pub const POOL_CAPACITY: usize = 10;
    /// Entities whose x drops below this are recycled
    pub const OFFSCREEN_X: i32 = -16;

    /// Dog running sprite
    pub const DOG_WIDTH: i32 = 28;
    pub const DOG_HEIGHT: i32 = 16;
    pub const DOG_RUN_MAX_FRAME: u8 = 3;

    /// Bark burst sprite, drawn in front of the dog's snout
    pub const BARK_WIDTH: i32 = 12;
    pub const BARK_HEIGHT: i32 = 12;
    pub const BARK_MAX_FRAME: u8 = 1;
    pub const BARK_OFFSET_X: i32 = 26;
    pub const BARK_DRAW_OFFSET_Y: i32 = -2;
    pub const BARK_HIT_OFFSET_Y: i32 = -6;

    /// Squirrel sprite (hazard)
    pub const SQUIRREL_WIDTH: i32 = 16;
    pub const SQUIRREL_HEIGHT: i32 = 8;
    pub const SQUIRREL_MAX_FRAME: u8 = 3;

    /// Ball sprite (collectible)
    pub const BALL_WIDTH: i32 = 8;
    pub const BALL_HEIGHT: i32 = 8;
    pub const BALL_MAX_FRAME: u8 = 3;

    /// Menu ball-throw sequence (full-height, left side of the screen)
    pub const BALL_THROW_WIDTH: i32 = 40;
    pub const BALL_THROW_HEIGHT: i32 = 64;
    pub const BALL_THROW_MAX_FRAME: u8 = 23;

    /// Menu tail wag
    pub const TAIL_WAG_WIDTH: i32 = 32;
    pub const TAIL_WAG_HEIGHT: i32 = 32;
    pub const TAIL_WAG_MAX_FRAME: u8 = 4;

    /// Grass tuft decoration
    pub const GRASS_WIDTH: i32 = 2;
    pub const GRASS_HEIGHT: i32 = 3;
    pub const GRASS_MAX_FRAME: u8 = 3;

    /// Lowest y an entity or the dog may occupy
    pub const ARENA_TOP: i32 = STATUS_BAR_HEIGHT;
    /// Exclusive upper bound for entity spawn y
    pub const SPAWN_Y_MAX: i32 = SCREEN_HEIGHT - 16;
}
