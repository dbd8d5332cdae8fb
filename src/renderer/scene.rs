//! Screen composition for each mode
//!
//! Reads state, never changes it.

use glam::IVec2;

use super::sprites::SpriteId;
use super::{BlitMode, Canvas};
use crate::consts::*;
use crate::game::Resume;
use crate::settings::Settings;
use crate::sim::GameState;

/// Title screen: the throw sequence, the wagging dog and a prompt
pub fn draw_menu(state: &GameState, canvas: &mut dyn Canvas) {
    let menu = &state.menu;
    canvas.blit(
        SpriteId::BallThrow,
        IVec2::ZERO,
        menu.throw.frame(),
        BlitMode::Overwrite,
    );
    canvas.blit(
        SpriteId::DogTailWag,
        IVec2::new(60, 32),
        menu.tail_wag.frame(),
        BlitMode::Overwrite,
    );

    if menu.throw.ready() {
        canvas.text(IVec2::new(42, 0), 2, "Let Go!");
    } else {
        canvas.text(IVec2::new(42, 0), 1, "Hold A to");
        canvas.text(IVec2::new(42, 8), 1, "Throw the Ball!");
    }
}

/// Controls and the sound toggle
pub fn draw_help(settings: &Settings, resume: Resume, canvas: &mut dyn Canvas) {
    canvas.text(IVec2::new(31, 0), 1, "HOW TO PLAY");
    canvas.text(IVec2::new(0, 10), 1, "Arrows: move the dog");
    canvas.text(IVec2::new(0, 18), 1, "A: bark at squirrels");
    canvas.text(IVec2::new(0, 26), 1, "Fetch balls, don't");
    canvas.text(IVec2::new(0, 34), 1, "get caught!");

    let sound = if settings.muted {
        "A: sound is OFF"
    } else {
        "A: sound is ON"
    };
    canvas.text(IVec2::new(0, 46), 1, sound);

    let back = match resume {
        Resume::Menu => "B: back to title",
        Resume::Play => "B: back to game",
    };
    canvas.text(IVec2::new(0, 56), 1, back);
}

/// Play field, status bar, and the game-over card once the freeze ends
pub fn draw_play(
    state: &GameState,
    settings: &Settings,
    best: Option<u16>,
    canvas: &mut dyn Canvas,
) {
    let session = &state.session;
    let score = session.score.to_string();

    if session.can_retry() {
        canvas.text(IVec2::new(12, 16), 2, "Game Over");
        canvas.text(IVec2::new(16, 32), 1, "press any button");
        canvas.text(IVec2::new(40, 40), 1, "to retry");
        canvas.text(IVec2::new(96, 0), 1, &score);
        if let Some(best) = best {
            canvas.text(IVec2::new(40, 54), 1, &format!("best {}", best));
        }
        return;
    }

    // Status bar
    canvas.text(IVec2::ZERO, 1, "barks:");
    let radius = (STATUS_BAR_HEIGHT / 2 - 1) as u8;
    let bark = &state.player.bark;
    for i in 1..=bark.max() {
        let center = IVec2::new(30 + 10 * i as i32, STATUS_BAR_HEIGHT / 2 - 1);
        canvas.circle(center, radius, bark.stock() >= i);
    }
    canvas.text(IVec2::new(96, 0), 1, &score);

    for &tuft in state.scenery.tufts() {
        canvas.blit(
            SpriteId::Grass,
            tuft,
            state.scenery.frame(),
            BlitMode::SelfMasked,
        );
    }

    // Dog, flashing while frozen after a loss
    let dog = state.player.pos;
    let flash_on = session.loss_flash > state.tuning.loss_flash_period / 2;
    if flash_on || settings.reduced_motion {
        canvas.blit(
            SpriteId::DogRunning,
            dog,
            state.anim.dog_run.frame(),
            BlitMode::SelfMasked,
        );
    }

    if bark.is_active() {
        canvas.blit(
            SpriteId::DogBark,
            dog + IVec2::new(BARK_OFFSET_X, BARK_DRAW_OFFSET_Y),
            bark.burst_elapsed() % (BARK_MAX_FRAME + 1),
            BlitMode::SelfMasked,
        );
    }

    for (_, squirrel) in state.squirrels.live() {
        canvas.blit(
            SpriteId::Squirrel,
            squirrel.pos,
            state.anim.squirrel.frame(),
            BlitMode::SelfMasked,
        );
    }

    for (_, ball) in state.balls.live() {
        canvas.blit(
            SpriteId::Ball,
            ball.pos,
            state.anim.ball.frame(),
            BlitMode::SelfMasked,
        );
    }
}
