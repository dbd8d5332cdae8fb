//! Sprite sheet catalogue
//!
//! The bitmaps themselves live with the platform; the core only needs names,
//! sizes and frame counts.

use glam::IVec2;

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    BallThrow,
    DogTailWag,
    DogRunning,
    DogBark,
    Squirrel,
    Ball,
    Grass,
}

impl SpriteId {
    pub fn size(self) -> IVec2 {
        match self {
            SpriteId::BallThrow => IVec2::new(BALL_THROW_WIDTH, BALL_THROW_HEIGHT),
            SpriteId::DogTailWag => IVec2::new(TAIL_WAG_WIDTH, TAIL_WAG_HEIGHT),
            SpriteId::DogRunning => IVec2::new(DOG_WIDTH, DOG_HEIGHT),
            SpriteId::DogBark => IVec2::new(BARK_WIDTH, BARK_HEIGHT),
            SpriteId::Squirrel => IVec2::new(SQUIRREL_WIDTH, SQUIRREL_HEIGHT),
            SpriteId::Ball => IVec2::new(BALL_WIDTH, BALL_HEIGHT),
            SpriteId::Grass => IVec2::new(GRASS_WIDTH, GRASS_HEIGHT),
        }
    }

    /// Index of the last frame in the sheet
    pub fn max_frame(self) -> u8 {
        match self {
            SpriteId::BallThrow => BALL_THROW_MAX_FRAME,
            SpriteId::DogTailWag => TAIL_WAG_MAX_FRAME,
            SpriteId::DogRunning => DOG_RUN_MAX_FRAME,
            SpriteId::DogBark => BARK_MAX_FRAME,
            SpriteId::Squirrel => SQUIRREL_MAX_FRAME,
            SpriteId::Ball => BALL_MAX_FRAME,
            SpriteId::Grass => GRASS_MAX_FRAME,
        }
    }
}
