//! Sound cues
//!
//! The core never waits on audio. It names a [`SoundEffect`] and hands it to
//! whatever [`AudioSink`] the platform provides; each effect also describes
//! itself as a short square-wave tune so a piezo speaker can play it without
//! any asset files.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball thrown, play starts
    Start,
    /// Help screen opened
    Help,
    /// Dog barks
    Bark,
    /// Ball caught
    Fetch,
    /// Squirrel scared off
    Scare,
    /// Caught by a squirrel
    GameOver,
}

/// One note of a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

const fn tone(freq_hz: u16, duration_ms: u16) -> Tone {
    Tone {
        freq_hz,
        duration_ms,
    }
}

const START: &[Tone] = &[tone(523, 60), tone(659, 60), tone(784, 120)];
const HELP: &[Tone] = &[tone(880, 40), tone(0, 20), tone(880, 40)];
const BARK: &[Tone] = &[tone(220, 30), tone(180, 50)];
const FETCH: &[Tone] = &[tone(1046, 40), tone(1318, 60)];
const SCARE: &[Tone] = &[tone(392, 30), tone(523, 30), tone(659, 30)];
const GAME_OVER: &[Tone] = &[tone(392, 150), tone(330, 150), tone(262, 300)];

impl SoundEffect {
    /// The tune for this cue (a zero frequency is a rest)
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::Start => START,
            SoundEffect::Help => HELP,
            SoundEffect::Bark => BARK,
            SoundEffect::Fetch => FETCH,
            SoundEffect::Scare => SCARE,
            SoundEffect::GameOver => GAME_OVER,
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayStarted => Some(SoundEffect::Start),
            GameEvent::HelpOpened => Some(SoundEffect::Help),
            GameEvent::BarkStarted => Some(SoundEffect::Bark),
            GameEvent::BallFetched { .. } => Some(SoundEffect::Fetch),
            GameEvent::SquirrelScared { .. } => Some(SoundEffect::Scare),
            GameEvent::Caught { .. } => Some(SoundEffect::GameOver),
            GameEvent::DifficultyRaised { .. } => None,
        }
    }
}

/// Where sound cues go
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Drops every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs cues instead of playing them (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let total_ms: u32 = effect.tones().iter().map(|t| t.duration_ms as u32).sum();
        log::debug!("♪ {:?} ({} ms)", effect, total_ms);
    }
}

/// Keeps every cue, for tests
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cue_has_a_tune() {
        for effect in [
            SoundEffect::Start,
            SoundEffect::Help,
            SoundEffect::Bark,
            SoundEffect::Fetch,
            SoundEffect::Scare,
            SoundEffect::GameOver,
        ] {
            assert!(!effect.tones().is_empty());
        }
        assert_eq!(
            SoundEffect::GameOver.tones().last(),
            Some(&Tone {
                freq_hz: 262,
                duration_ms: 300
            })
        );
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::BallFetched { slot: 0, score: 1 }),
            Some(SoundEffect::Fetch)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::DifficultyRaised { score: 10 }),
            None
        );
    }
}
