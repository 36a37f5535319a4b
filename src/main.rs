//! Dodge entry point
//!
//! Headless native driver: loads config, then lets the autopilot fly one or
//! more runs at a fixed 60 Hz, routing audio cues and HUD updates to the log.
//!
//! Usage: `dodge [config.json] [--runs N] [--quality low|medium|high]`
//! (verbosity via `RUST_LOG`)

use std::time::{SystemTime, UNIX_EPOCH};

use dodge::audio::{AudioManager, LogBackend};
use dodge::consts::{FRAME_DT, REFERENCE_FPS};
use dodge::renderer::build_frame;
use dodge::sim::{GameEvent, GameState, TickInput, tick};
use dodge::ui::HudSnapshot;
use dodge::{Config, QualityPreset};

/// Hard stop for a single run (5 minutes of game time)
const MAX_FRAMES_PER_RUN: u64 = 5 * 60 * 60;

struct Args {
    config_path: Option<String>,
    runs: u32,
    /// Overrides the preset from the config file
    quality: Option<QualityPreset>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        runs: 1,
        quality: None,
    };
    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--runs" => {
                let value = iter.next().ok_or("--runs needs a value")?;
                args.runs = value
                    .parse()
                    .map_err(|_| format!("invalid run count: {value}"))?;
            }
            "--quality" => {
                let value = iter.next().ok_or("--quality needs a value")?;
                let preset = QualityPreset::from_str(&value)
                    .ok_or_else(|| format!("unknown quality preset: {value}"))?;
                args.quality = Some(preset);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag: {arg}")),
            _ => args.config_path = Some(arg),
        }
    }
    Ok(args)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Fly one run until the ship has fallen off screen; returns seconds survived
fn play_run(state: &mut GameState, audio: &mut AudioManager<LogBackend>) -> f32 {
    let log_every = REFERENCE_FPS as u64;

    while state.frame < MAX_FRAMES_PER_RUN {
        let input = TickInput::autopilot(state);
        tick(state, &input, FRAME_DT);

        let events = state.drain_events();
        let finished = events.contains(&GameEvent::PlayerGone);
        audio.handle_all(events);

        let vertices = build_frame(state);
        log::trace!("Frame {}: {} vertices", state.frame, vertices.len());

        if state.frame % log_every == 0 {
            let hud = HudSnapshot::from_state(state);
            log::debug!("{}", hud.lines().join(" | "));
        }

        if finished {
            break;
        }
    }

    let hud = HudSnapshot::from_state(state);
    if let Some(banner) = hud.banner() {
        log::info!("{}", banner);
    } else {
        log::warn!("Run stopped at the frame cap with {} lives left", hud.lives);
    }
    match serde_json::to_string(&hud) {
        Ok(json) => log::info!("Final HUD: {}", json),
        Err(e) => log::warn!("Could not serialize HUD: {}", e),
    }
    hud.score
}

fn main() {
    env_logger::init();
    log::info!("Dodge (native) starting...");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: dodge [config.json] [--runs N] [--quality low|medium|high]");
            std::process::exit(2);
        }
    };

    let mut config = match &args.config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(preset) = args.quality {
        config.settings.apply_preset(preset);
    }
    log::info!("Quality: {}", config.settings.quality.as_str());

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut audio = AudioManager::new(LogBackend, &config.settings);
    let mut state = GameState::new(seed, config.tuning, config.settings);

    let mut best = 0.0f32;
    for run in 0..args.runs {
        if run > 0 {
            state.restart_with_seed(seed.wrapping_add(run as u64));
        }
        let survived = play_run(&mut state, &mut audio);
        log::info!("Run {} survived {:.1}s", run + 1, survived);
        best = best.max(survived);
    }

    println!("Best time: {:.1}s over {} run(s)", best, args.runs);
}
