//! Collision rules
//!
//! One pass per tick over both pools, slot by slot. Every rule that matches
//! is applied, so catching a ball and touching a squirrel in the same tick
//! both count.

use super::collision::{bark_hitbox, body_hitbox, entity_hitbox};
use super::difficulty::adjustment_for;
use super::pool::Species;
use super::state::{GameEvent, GameState};

/// Resolve every overlap between the dog, its bark and the live entities
pub fn resolve_collisions(state: &mut GameState) {
    let was_lost = state.session.lost;
    let body = body_hitbox(state.player.pos);
    let bark = state
        .player
        .bark
        .is_active()
        .then(|| bark_hitbox(state.player.pos));

    for slot in 0..state.squirrels.capacity() {
        if let Some(squirrel) = state.squirrels.get(slot).filter(|e| e.alive).copied() {
            let hitbox = entity_hitbox(Species::Hazard, squirrel.pos);

            if body.overlaps(&hitbox) {
                state.session.lost = true;
            }

            if bark.is_some_and(|b| b.overlaps(&hitbox)) {
                state.squirrels.kill_at(slot);
                state.events.push(GameEvent::SquirrelScared { slot });
                log::debug!("Scared squirrel {}", slot);
            }
        }

        if let Some(ball) = state.balls.get(slot).filter(|e| e.alive).copied() {
            let hitbox = entity_hitbox(Species::Collectible, ball.pos);
            if body.overlaps(&hitbox) {
                state.balls.kill_at(slot);
                score_point(state, slot);
            }
        }
    }

    // Reported once the pass is over so it carries the final score
    if state.session.lost && !was_lost {
        state.events.push(GameEvent::Caught {
            score: state.session.score,
        });
        log::info!("Caught by a squirrel with {} points", state.session.score);
    }
}

/// Add a point and apply whatever milestone the new score reaches
fn score_point(state: &mut GameState, slot: usize) {
    let score = state.session.score.saturating_add(1);
    state.session.score = score;
    state.events.push(GameEvent::BallFetched { slot, score });

    let adj = adjustment_for(score, &state.tuning.difficulty);
    if !adj.is_none() {
        state.session.difficulty.apply(adj);
        state.player.bark.raise_refill_period(adj.refill_period);
        state.events.push(GameEvent::DifficultyRaised { score });
        log::debug!(
            "Score {}: squirrel chance {}, speed ceiling {}, bark refill {}",
            score,
            state.session.difficulty.hazard_chance,
            state.session.difficulty.speed_ceiling,
            state.player.bark.refill_period()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pool::Entity;
    use crate::tuning::Tuning;
    use glam::IVec2;

    fn entity(x: i32, y: i32) -> Entity {
        Entity {
            alive: true,
            pos: IVec2::new(x, y),
            speed: 1,
        }
    }

    fn state_with_dog_at(x: i32, y: i32) -> GameState {
        let mut state = GameState::new(Tuning::default());
        state.player.pos = IVec2::new(x, y);
        state
    }

    #[test]
    fn test_fetch_scores_and_recycles() {
        let mut state = state_with_dog_at(20, 24);
        state.balls.set(4, entity(30, 28));

        resolve_collisions(&mut state);

        assert_eq!(state.session.score, 1);
        assert!(!state.balls.get(4).unwrap().alive);
        assert_eq!(
            state.events,
            vec![GameEvent::BallFetched { slot: 4, score: 1 }]
        );
    }

    #[test]
    fn test_squirrel_on_body_loses() {
        let mut state = state_with_dog_at(20, 24);
        state.squirrels.set(0, entity(30, 28));

        resolve_collisions(&mut state);
        assert!(state.session.lost);
        assert!(state.squirrels.get(0).unwrap().alive, "touching doesn't recycle");

        // idempotent
        resolve_collisions(&mut state);
        assert!(state.session.lost);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_bark_scares_squirrel_without_scoring() {
        let mut state = state_with_dog_at(20, 24);
        state.player.bark.try_start();
        state.squirrels.set(2, entity(20 + DOG_WIDTH, 20));

        resolve_collisions(&mut state);
        assert!(!state.session.lost);
        assert_eq!(state.session.score, 0);
        assert!(!state.squirrels.get(2).unwrap().alive);
    }

    #[test]
    fn test_bark_hitbox_inactive_without_bark() {
        let mut state = state_with_dog_at(20, 24);
        state.squirrels.set(2, entity(20 + DOG_WIDTH, 20));

        resolve_collisions(&mut state);
        assert!(state.squirrels.get(2).unwrap().alive);
        assert!(!state.session.lost);
    }

    #[test]
    fn test_loss_and_score_in_same_tick() {
        let mut state = state_with_dog_at(20, 24);
        state.squirrels.set(0, entity(30, 28));
        state.balls.set(0, entity(24, 26));
        state.balls.set(1, entity(36, 26));

        resolve_collisions(&mut state);
        assert!(state.session.lost);
        assert_eq!(state.session.score, 2);
    }

    #[test]
    fn test_caught_reports_score_after_later_fetch() {
        let mut state = state_with_dog_at(20, 24);
        state.session.score = 16;
        state.squirrels.set(0, entity(30, 28));
        state.balls.set(1, entity(36, 26));

        resolve_collisions(&mut state);
        assert_eq!(state.session.score, 17);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BallFetched { slot: 1, score: 17 },
                GameEvent::Caught { score: 17 },
            ]
        );
    }

    #[test]
    fn test_tenth_point_raises_difficulty() {
        let mut state = state_with_dog_at(20, 24);
        state.session.score = 9;
        state.balls.set(0, entity(30, 28));
        let chance = state.session.difficulty.hazard_chance;
        let period = state.player.bark.refill_period();

        resolve_collisions(&mut state);
        assert_eq!(state.session.score, 10);
        assert_eq!(state.session.difficulty.hazard_chance, chance + 1);
        assert_eq!(state.player.bark.refill_period(), period + 20);
        assert_eq!(state.session.difficulty.speed_ceiling, 2);
    }
}
