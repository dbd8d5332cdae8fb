//! Hands-off player
//!
//! Picks buttons from the current state alone so a session can run without
//! anyone at the controls. The native runner uses it to play headless.

use crate::consts::*;
use crate::game::GameMode;
use crate::platform::{Button, Buttons};
use crate::sim::{Entity, GameState, body_hitbox};

/// How far in front of the snout a squirrel gets barked at
const BARK_REACH: i32 = 12;
/// Extra rows above and below the body treated as the dog's lane
const LANE_MARGIN: i32 = 2;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Alternates so a repeated tap becomes a fresh press each time
    tap: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons to hold this tick
    pub fn buttons(&mut self, state: &GameState, mode: GameMode) -> Buttons {
        match mode {
            GameMode::Menu if state.menu.throw.ready() => Buttons::NONE,
            GameMode::Menu => Button::A.into(),
            GameMode::Help { .. } => self.tap(Button::B),
            GameMode::Play if state.session.can_retry() => self.tap(Button::A),
            GameMode::Play if state.session.lost => Buttons::NONE,
            GameMode::Play => self.steer(state),
        }
    }

    fn tap(&mut self, button: Button) -> Buttons {
        self.tap = !self.tap;
        if self.tap { button.into() } else { Buttons::NONE }
    }

    /// Bark at or dodge the closest squirrel in the lane, otherwise chase a ball
    fn steer(&mut self, state: &GameState) -> Buttons {
        let dog = state.player.pos;
        let body = body_hitbox(dog);
        let bark = &state.player.bark;

        let threat = state
            .squirrels
            .live()
            .map(|(_, e)| e)
            .filter(|e| e.pos.x + SQUIRREL_WIDTH > body.min.x)
            .filter(|e| {
                e.pos.y < body.max().y + LANE_MARGIN
                    && e.pos.y + SQUIRREL_HEIGHT > body.min.y - LANE_MARGIN
            })
            .min_by_key(|e| e.pos.x);

        if let Some(threat) = threat {
            if bark.is_active() {
                return Buttons::NONE;
            }
            let gap = threat.pos.x - body.max().x;
            if bark.stock() > 0 {
                return if gap < BARK_REACH {
                    self.tap(Button::A)
                } else {
                    Buttons::NONE
                };
            }
            return dodge(dog, threat);
        }

        let target = state
            .balls
            .live()
            .map(|(_, e)| e)
            .filter(|e| e.pos.x + BALL_WIDTH > dog.x)
            .min_by_key(|e| e.pos.x);

        match target {
            Some(ball) => chase(dog, ball),
            None => Buttons::NONE,
        }
    }
}

/// Move out of the squirrel's row, away from the nearer wall
fn dodge(dog: glam::IVec2, threat: &Entity) -> Buttons {
    let dog_mid = dog.y + DOG_HEIGHT / 2;
    let threat_mid = threat.pos.y + SQUIRREL_HEIGHT / 2;
    let at_top = dog.y <= ARENA_TOP + 2;
    let at_bottom = dog.y >= SCREEN_HEIGHT - DOG_HEIGHT - 2;

    if at_top || (threat_mid < dog_mid && !at_bottom) {
        Button::Down.into()
    } else {
        Button::Up.into()
    }
}

/// Line the dog's middle up with the ball
fn chase(dog: glam::IVec2, ball: &Entity) -> Buttons {
    let mut buttons = Buttons::NONE;
    let target_y = ball.pos.y + BALL_HEIGHT / 2 - DOG_HEIGHT / 2;
    let target_x = ball.pos.x - DOG_WIDTH / 2;

    if dog.y < target_y - 1 {
        buttons.insert(Button::Down);
    } else if dog.y > target_y + 1 {
        buttons.insert(Button::Up);
    }
    if dog.x < target_x - 2 {
        buttons.insert(Button::Right);
    } else if dog.x > target_x + 2 {
        buttons.insert(Button::Left);
    }
    buttons
}
