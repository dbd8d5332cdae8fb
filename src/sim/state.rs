//! Game state and core simulation types
//!
//! Everything the menu and the play field need from one tick to the next
//! lives in [`GameState`]. `reset` rebuilds all of it from the tuning.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::anim::{BounceCounter, ThrowAnimation, WrapCounter};
use super::bark::BarkMeter;
use super::difficulty::Difficulty;
use super::pool::{EntityPool, Species};
use super::scenery::Scenery;
use crate::consts::*;
use crate::tuning::Tuning;

/// Something worth telling the outside world about (sounds, logs, scores)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Throw finished, play begins
    PlayStarted,
    /// Help screen opened
    HelpOpened,
    BarkStarted,
    /// A ball was caught; `score` is the new score
    BallFetched { slot: usize, score: u16 },
    /// A bark scared a squirrel away
    SquirrelScared { slot: usize },
    /// A milestone raised the difficulty
    DifficultyRaised { score: u16 },
    /// A squirrel reached the dog
    Caught { score: u16 },
}

/// The dog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub bark: BarkMeter,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: IVec2::new(0, SCREEN_HEIGHT / 2 - DOG_HEIGHT / 2),
            bark: BarkMeter::new(tuning),
        }
    }

    /// Move by `delta`, staying inside the play field
    ///
    /// The dog must leave room for its bark on the right, and the left bound
    /// comes from tuning.
    pub fn step(&mut self, delta: IVec2, tuning: &Tuning) {
        let max = IVec2::new(
            SCREEN_WIDTH - DOG_WIDTH - BARK_WIDTH,
            SCREEN_HEIGHT - DOG_HEIGHT,
        );
        if delta.x != 0 {
            self.pos.x = (self.pos.x + delta.x).clamp(tuning.player_min_x, max.x);
        }
        if delta.y != 0 {
            self.pos.y = (self.pos.y + delta.y).clamp(ARENA_TOP, max.y);
        }
    }
}

/// Score and end-of-run bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u16,
    pub difficulty: Difficulty,
    /// Set once a squirrel reaches the dog; only a reset clears it
    pub lost: bool,
    /// Ticks of freeze left after a loss
    pub loss_freeze: u8,
    /// Flash cycle position after a loss
    pub loss_flash: u8,
    /// Play ticks simulated this run (excludes help and the loss freeze)
    pub ticks: u32,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            difficulty: Difficulty::new(tuning),
            lost: false,
            loss_freeze: tuning.loss_freeze_ticks,
            loss_flash: tuning.loss_flash_period,
            ticks: 0,
        }
    }

    /// Freeze window over, retry allowed
    pub fn can_retry(&self) -> bool {
        self.lost && self.loss_freeze == 0
    }
}

/// Title screen animation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub throw: ThrowAnimation,
    pub tail_wag: BounceCounter,
}

impl MenuState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            throw: ThrowAnimation::new(tuning.throw_windup_frame, BALL_THROW_MAX_FRAME),
            tail_wag: BounceCounter::new(TAIL_WAG_MAX_FRAME),
        }
    }
}

/// Looping play-field animations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAnimations {
    pub dog_run: WrapCounter,
    pub squirrel: WrapCounter,
    pub ball: WrapCounter,
}

impl Default for PlayAnimations {
    fn default() -> Self {
        Self {
            dog_run: WrapCounter::new(DOG_RUN_MAX_FRAME),
            squirrel: WrapCounter::new(SQUIRREL_MAX_FRAME),
            ball: WrapCounter::new(BALL_MAX_FRAME),
        }
    }
}

impl PlayAnimations {
    pub fn advance(&mut self) {
        self.dog_run.advance();
        self.ball.advance();
        self.squirrel.advance();
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub menu: MenuState,
    pub session: Session,
    pub player: Player,
    pub squirrels: EntityPool,
    pub balls: EntityPool,
    pub anim: PlayAnimations,
    pub scenery: Scenery,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            menu: MenuState::new(&tuning),
            session: Session::new(&tuning),
            player: Player::new(&tuning),
            squirrels: EntityPool::new(),
            balls: EntityPool::new(),
            anim: PlayAnimations::default(),
            scenery: Scenery::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Back to a fresh game with the same tuning
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::new(tuning);
        log::info!("Game reset");
    }

    pub fn pool(&self, species: Species) -> &EntityPool {
        match species {
            Species::Hazard => &self.squirrels,
            Species::Collectible => &self.balls,
        }
    }

    pub fn pool_mut(&mut self, species: Species) -> &mut EntityPool {
        match species {
            Species::Hazard => &mut self.squirrels,
            Species::Collectible => &mut self.balls,
        }
    }

    /// Spawn chance out of 255 for a species
    pub fn spawn_chance(&self, species: Species) -> u8 {
        match species {
            Species::Hazard => self.session.difficulty.hazard_chance,
            Species::Collectible => self.session.difficulty.collectible_chance,
        }
    }

    /// Hand over and clear the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
