//! Fetch Frenzy entry point
//!
//! Natively this runs a headless session driven by the autopilot:
//!
//! ```text
//! fetch-frenzy [seed] [ticks] [tuning.json]
//! ```
//!
//! Set `RUST_LOG=debug` to follow fetches and difficulty steps.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fetch_frenzy::audio::LogAudio;
    use fetch_frenzy::autopilot::Autopilot;
    use fetch_frenzy::consts::TICKS_PER_SECOND;
    use fetch_frenzy::platform::InputTracker;
    use fetch_frenzy::renderer::CommandList;
    use fetch_frenzy::{Game, Settings};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Fetch Frenzy (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 1u64);
    let ticks = parse_arg(args.next(), "ticks", 60 * TICKS_PER_SECOND);
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();

    let mut game = Game::new(seed, tuning, Settings::default());
    let mut pilot = Autopilot::new();
    let mut tracker = InputTracker::new();
    let mut canvas = CommandList::new();
    let mut audio = LogAudio;

    for _ in 0..ticks {
        let held = pilot.buttons(&game.state, game.mode());
        game.update(&tracker.sample(held), &mut audio);

        canvas.clear();
        game.draw(&mut canvas);
    }

    log::info!(
        "Ran {} ticks: mode {:?}, score {}, best {}",
        ticks,
        game.mode(),
        game.state.session.score,
        game.high_scores.top_score().unwrap_or(0)
    );
    for (rank, entry) in game.high_scores.entries.iter().enumerate() {
        log::info!("  #{} {} ({} ticks)", rank + 1, entry.score, entry.ticks);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display + Copy>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', using {}", name, raw, default);
            default
        }),
        None => default,
    }
}

/// Read a tuning file, falling back to defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> fetch_frenzy::Tuning {
    use fetch_frenzy::Tuning;

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to read tuning file {}: {}", path, e);
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Rejected tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The handheld build provides its own entry point
}
