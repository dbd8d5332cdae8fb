//! Fixed timestep simulation tick
//!
//! One call per frame for whichever screen is showing. The caller owns the
//! mode machine; these functions only report when a transition is due.

use glam::IVec2;

use super::pool::Species;
use super::rng::RandomSource;
use super::rules::resolve_collisions;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::platform::{Button, TickInput};

/// What the title screen wants next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    /// The throw played out; start playing
    StartPlay,
}

/// What the play field wants next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Continue,
    /// Loss acknowledged; start over from the title
    Retry,
}

/// Advance the title screen by one tick
pub fn menu_tick(state: &mut GameState, input: &TickInput) -> MenuOutcome {
    if state.menu.throw.finished() {
        state.events.push(GameEvent::PlayStarted);
        log::info!("Ball thrown, game on");
        return MenuOutcome::StartPlay;
    }

    state.menu.throw.advance(input.is_held(Button::A));
    state.menu.tail_wag.advance();
    MenuOutcome::Stay
}

/// Advance the play field by one tick
pub fn play_tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
) -> PlayOutcome {
    if state.session.lost {
        return lost_tick(state, input);
    }

    state.session.ticks = state.session.ticks.saturating_add(1);

    // Scroll
    for species in [Species::Hazard, Species::Collectible] {
        let recycled = state.pool_mut(species).advance(OFFSCREEN_X);
        if recycled > 0 {
            log::trace!("{:?}: {} left the screen", species, recycled);
        }
    }

    // Spawn rolls, squirrel first
    let speed_ceiling = state.session.difficulty.speed_ceiling as i32;
    for species in [Species::Hazard, Species::Collectible] {
        let chance = state.spawn_chance(species) as i32;
        if rng.range(0, 255) < chance {
            let spawned = state.pool_mut(species).try_resurrect(
                SCREEN_WIDTH,
                ARENA_TOP..SPAWN_Y_MAX,
                1..speed_ceiling + 1,
                rng,
            );
            match spawned {
                Some(slot) => log::trace!("{:?} spawned in slot {}", species, slot),
                None => log::trace!("{:?} pool full, spawn skipped", species),
            }
        }
    }

    resolve_collisions(state);
    if state.session.lost {
        return PlayOutcome::Continue;
    }

    // Bark upkeep
    state.player.bark.regenerate();
    state.player.bark.tick_burst();

    state.anim.advance();
    state.scenery.advance();

    apply_input(state, input);
    PlayOutcome::Continue
}

/// Frozen after a loss: count the freeze down, then wait for any press
fn lost_tick(state: &mut GameState, input: &TickInput) -> PlayOutcome {
    let session = &mut state.session;
    if session.loss_freeze > 0 {
        session.loss_freeze -= 1;
        session.loss_flash = session.loss_flash.saturating_sub(1);
        if session.loss_flash == 0 {
            session.loss_flash = state.tuning.loss_flash_period;
        }
        return PlayOutcome::Continue;
    }

    if input.any_pressed() {
        log::info!("Retry after scoring {}", session.score);
        return PlayOutcome::Retry;
    }
    PlayOutcome::Continue
}

/// Move the dog and start a bark
fn apply_input(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;
    let (sx, sy) = (tuning.player_speed_x, tuning.player_speed_y);

    if input.is_held(Button::Up) {
        player.step(IVec2::new(0, -sy), tuning);
    }
    if input.is_held(Button::Down) {
        player.step(IVec2::new(0, sy), tuning);
    }
    if input.is_held(Button::Left) {
        player.step(IVec2::new(-sx, 0), tuning);
    }
    if input.is_held(Button::Right) {
        player.step(IVec2::new(sx, 0), tuning);
    }

    if input.just_pressed(Button::A) && player.bark.try_start() {
        state.events.push(GameEvent::BarkStarted);
    }
}
