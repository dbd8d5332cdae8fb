//! Top-level mode machine
//!
//! [`Game`] owns the whole session and is what the platform drives: one
//! `update` and one `draw` per tick.

use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::HighScores;
use crate::platform::{Button, TickInput};
use crate::renderer::{self, Canvas};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GameState, MenuOutcome, PlayOutcome, RandomSource, menu_tick, play_tick, seeded,
};
use crate::tuning::Tuning;

/// Screen the help page returns to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Menu,
    Play,
}

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Help { resume: Resume },
    Play,
}

impl GameMode {
    fn resume(self) -> Option<Resume> {
        match self {
            GameMode::Menu => Some(Resume::Menu),
            GameMode::Play => Some(Resume::Play),
            GameMode::Help { .. } => None,
        }
    }
}

impl From<Resume> for GameMode {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Menu => GameMode::Menu,
            Resume::Play => GameMode::Play,
        }
    }
}

/// Game instance holding all state
pub struct Game<R = Pcg32> {
    pub state: GameState,
    pub settings: Settings,
    pub high_scores: HighScores,
    mode: GameMode,
    rng: R,
}

impl Game<Pcg32> {
    /// New game driven by a seeded generator
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_rng(seeded(seed), tuning, settings)
    }
}

impl<R: RandomSource> Game<R> {
    /// New game drawing randomness from `rng`
    pub fn with_rng(rng: R, tuning: Tuning, settings: Settings) -> Self {
        Self {
            state: GameState::new(tuning),
            settings,
            high_scores: HighScores::new(),
            mode: GameMode::Menu,
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Advance one tick
    pub fn update(&mut self, input: &TickInput, audio: &mut dyn AudioSink) {
        match self.mode {
            GameMode::Menu | GameMode::Play if self.wants_help(input) => {
                if let Some(resume) = self.mode.resume() {
                    self.mode = GameMode::Help { resume };
                    self.state.events.push(GameEvent::HelpOpened);
                    log::info!("Help opened from {:?}", resume);
                }
            }
            GameMode::Menu => {
                if menu_tick(&mut self.state, input) == MenuOutcome::StartPlay {
                    self.mode = GameMode::Play;
                }
            }
            GameMode::Play => match play_tick(&mut self.state, input, &mut self.rng) {
                PlayOutcome::Continue => {}
                PlayOutcome::Retry => self.reset(),
            },
            GameMode::Help { resume } => self.update_help(input, resume),
        }

        self.dispatch_events(audio);
    }

    /// Draw the active screen
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.mode {
            GameMode::Menu => renderer::draw_menu(&self.state, canvas),
            GameMode::Help { resume } => renderer::draw_help(&self.settings, resume, canvas),
            GameMode::Play => renderer::draw_play(
                &self.state,
                &self.settings,
                self.high_scores.top_score(),
                canvas,
            ),
        }
    }

    /// Fresh game back on the title screen. Settings and the score table stay.
    pub fn reset(&mut self) {
        self.state.reset();
        self.mode = GameMode::Menu;
    }

    /// Help opens on a B press, except while a loss is on screen
    fn wants_help(&self, input: &TickInput) -> bool {
        input.just_pressed(Button::B) && !self.state.session.lost
    }

    /// Help only knows two buttons: B leaves, A toggles sound
    fn update_help(&mut self, input: &TickInput, resume: Resume) {
        if input.just_pressed(Button::B) {
            self.mode = resume.into();
            log::info!("Help closed, back to {:?}", resume);
            return;
        }
        if input.just_pressed(Button::A) {
            self.settings.toggle_mute();
        }
    }

    /// Forward this tick's events to the score table and the speaker
    fn dispatch_events(&mut self, audio: &mut dyn AudioSink) {
        for event in self.state.drain_events() {
            if let GameEvent::Caught { score } = event {
                if let Some(rank) = self.high_scores.add_score(score, self.state.session.ticks) {
                    log::info!("New high score #{}: {}", rank, score);
                }
            }

            if self.settings.muted {
                continue;
            }
            if let Some(effect) = SoundEffect::for_event(&event) {
                audio.play(effect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::consts::*;
    use crate::platform::Buttons;
    use crate::renderer::{CommandList, SpriteId};
    use crate::sim::{Entity, ScriptedRng};
    use glam::IVec2;

    fn game() -> Game<ScriptedRng> {
        Game::with_rng(ScriptedRng::default(), Tuning::default(), Settings::default())
    }

    /// Hold A through the wind-up, then let go until play starts
    fn throw_ball(game: &mut Game<ScriptedRng>) {
        let mut audio = NullAudio;
        while !game.state.menu.throw.ready() {
            game.update(&TickInput::hold(Button::A), &mut audio);
        }
        while game.mode() == GameMode::Menu {
            game.update(&TickInput::default(), &mut audio);
        }
    }

    fn live(x: i32, y: i32) -> Entity {
        Entity {
            alive: true,
            pos: IVec2::new(x, y),
            speed: 1,
        }
    }

    #[test]
    fn test_starts_on_menu_and_throws_into_play() {
        let mut g = game();
        assert_eq!(g.mode(), GameMode::Menu);

        let mut sounds: Vec<SoundEffect> = Vec::new();
        while !g.state.menu.throw.ready() {
            g.update(&TickInput::hold(Button::A), &mut sounds);
        }
        while g.mode() == GameMode::Menu {
            g.update(&TickInput::default(), &mut sounds);
        }
        assert_eq!(g.mode(), GameMode::Play);
        assert_eq!(sounds, vec![SoundEffect::Start]);
    }

    #[test]
    fn test_help_round_trip_from_play_keeps_state() {
        let mut g = game();
        throw_ball(&mut g);
        let mut audio = NullAudio;

        // play a little so counters are mid-flight
        g.state.balls.set(2, live(100, 40));
        g.update(&TickInput::press(Button::A), &mut audio);
        for _ in 0..5 {
            g.update(&TickInput::hold(Button::Down), &mut audio);
        }
        let snapshot = serde_json::to_string(&g.state).unwrap();

        g.update(&TickInput::press(Button::B), &mut audio);
        assert_eq!(
            g.mode(),
            GameMode::Help {
                resume: Resume::Play
            }
        );

        // anything but B is ignored by play while help is up
        for _ in 0..30 {
            g.update(
                &TickInput::hold(Buttons::from_slice(&[Button::Up, Button::Left])),
                &mut audio,
            );
        }
        g.update(&TickInput::press(Button::A), &mut audio);
        g.update(&TickInput::press(Button::B), &mut audio);

        assert_eq!(g.mode(), GameMode::Play);
        assert_eq!(serde_json::to_string(&g.state).unwrap(), snapshot);
        assert!(g.settings.muted);
    }

    #[test]
    fn test_help_from_menu_returns_to_menu() {
        let mut g = game();
        let mut audio = NullAudio;
        for _ in 0..5 {
            g.update(&TickInput::hold(Button::A), &mut audio);
        }
        let throw = g.state.menu.throw;

        g.update(&TickInput::press(Button::B), &mut audio);
        assert_eq!(
            g.mode(),
            GameMode::Help {
                resume: Resume::Menu
            }
        );
        g.update(&TickInput::hold(Button::A), &mut audio);
        g.update(&TickInput::press(Button::B), &mut audio);

        assert_eq!(g.mode(), GameMode::Menu);
        assert_eq!(g.state.menu.throw, throw);
    }

    #[test]
    fn test_muted_game_plays_no_cues() {
        let mut g = game();
        g.settings.muted = true;
        let mut sounds: Vec<SoundEffect> = Vec::new();
        while !g.state.menu.throw.ready() {
            g.update(&TickInput::hold(Button::A), &mut sounds);
        }
        while g.mode() == GameMode::Menu {
            g.update(&TickInput::default(), &mut sounds);
        }
        g.update(&TickInput::press(Button::A), &mut sounds);
        assert!(sounds.is_empty());
        assert!(g.state.player.bark.is_active(), "muting never changes play");
    }

    #[test]
    fn test_scenario_a_tenth_ball() {
        let mut g = game();
        throw_ball(&mut g);
        g.state.session.score = 9;
        let dog = g.state.player.pos;
        g.state.balls.set(0, live(dog.x + 10, dog.y + 4));
        let chance = g.state.session.difficulty.hazard_chance;
        let period = g.state.player.bark.refill_period();

        let mut sounds: Vec<SoundEffect> = Vec::new();
        g.update(&TickInput::default(), &mut sounds);

        assert_eq!(g.state.session.score, 10);
        assert_eq!(g.state.session.difficulty.hazard_chance, chance + 1);
        assert_eq!(g.state.player.bark.refill_period(), period + 20);
        assert_eq!(sounds, vec![SoundEffect::Fetch]);
    }

    #[test]
    fn test_scenario_c_bark_repels() {
        let mut g = game();
        throw_ball(&mut g);
        let mut audio = NullAudio;
        g.update(&TickInput::press(Button::A), &mut audio);
        assert!(g.state.player.bark.is_active());

        let dog = g.state.player.pos;
        // one pixel of scroll later it sits in the bark, clear of the body
        g.state.squirrels.set(0, live(dog.x + DOG_WIDTH + 1, dog.y - 2));

        let mut sounds: Vec<SoundEffect> = Vec::new();
        g.update(&TickInput::default(), &mut sounds);

        assert!(!g.state.squirrels.get(0).unwrap().alive);
        assert!(!g.state.session.lost);
        assert_eq!(g.state.session.score, 0);
        assert_eq!(sounds, vec![SoundEffect::Scare]);
    }

    #[test]
    fn test_loss_records_score_then_retry_resets_to_menu() {
        let mut g = game();
        throw_ball(&mut g);
        let mut audio = NullAudio;
        g.state.session.score = 12;
        g.state.session.difficulty.speed_ceiling = 5;
        let dog = g.state.player.pos;
        g.state.squirrels.set(0, live(dog.x + 10, dog.y + 4));

        let mut sounds: Vec<SoundEffect> = Vec::new();
        g.update(&TickInput::default(), &mut sounds);
        assert!(g.state.session.lost);
        assert_eq!(sounds, vec![SoundEffect::GameOver]);
        assert_eq!(g.high_scores.top_score(), Some(12));

        // B doesn't open help over a loss
        g.update(&TickInput::press(Button::B), &mut audio);
        assert_eq!(g.mode(), GameMode::Play);

        for _ in 0..g.state.tuning.loss_freeze_ticks {
            g.update(&TickInput::default(), &mut audio);
        }
        let mut canvas = CommandList::new();
        g.draw(&mut canvas);
        assert!(canvas.has_text("Game Over"));
        assert!(canvas.has_text("best 12"));

        g.update(&TickInput::press(Button::Left), &mut audio);
        assert_eq!(g.mode(), GameMode::Menu);
        assert_eq!(g.state.session.score, 0);
        assert!(!g.state.session.lost);
        assert_eq!(g.state.session.difficulty.speed_ceiling, 2);
        assert_eq!(g.state.squirrels.live_count(), 0);
        assert_eq!(g.high_scores.top_score(), Some(12));
    }

    #[test]
    fn test_best_score_includes_fetch_on_loss_tick() {
        let mut g = game();
        throw_ball(&mut g);
        g.state.session.score = 16;
        let dog = g.state.player.pos;
        g.state.squirrels.set(0, live(dog.x + 10, dog.y + 4));
        g.state.balls.set(1, live(dog.x + 12, dog.y + 4));

        g.update(&TickInput::default(), &mut NullAudio);

        assert!(g.state.session.lost);
        assert_eq!(g.state.session.score, 17);
        assert_eq!(g.high_scores.top_score(), Some(17));
    }

    #[test]
    fn test_draw_follows_mode() {
        let mut g = game();
        let mut canvas = CommandList::new();
        g.draw(&mut canvas);
        assert_eq!(canvas.blits_of(SpriteId::BallThrow).count(), 1);

        g.update(&TickInput::press(Button::B), &mut NullAudio);
        canvas.clear();
        g.draw(&mut canvas);
        assert!(canvas.has_text("HOW TO PLAY"));

        g.update(&TickInput::press(Button::B), &mut NullAudio);
        throw_ball(&mut g);
        canvas.clear();
        g.draw(&mut canvas);
        assert_eq!(canvas.blits_of(SpriteId::DogRunning).count(), 1);
    }
}
