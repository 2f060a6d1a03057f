//! Jelly Slice entry point
//!
//! Headless attract-mode runner: the autopilot plays sessions at a fixed
//! 60 Hz step, every frame is projected to vertices, and a JSON summary is
//! printed at the end. A windowed host would replace the autopilot with real
//! pointer events and hand the vertices to its GPU.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use jelly_slice::consts::FPS;
use jelly_slice::render;
use jelly_slice::sim::{Autopilot, GameEvent, PointerAction};
use jelly_slice::{HighScore, Session, Settings};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "jelly-slice", about = "Headless Jelly Slice attract-mode runner")]
struct Options {
    /// Seed for the first session; later sessions use seed + 1, seed + 2, ...
    #[arg(long, value_name = "N", default_value_t = 12345)]
    seed: u64,
    /// Stop after this many frames in total
    #[arg(long, value_name = "N", default_value_t = 60 * 60 * 5)]
    frames: u64,
    /// Stop after this many finished sessions
    #[arg(long, value_name = "N", default_value_t = 3)]
    sessions: u32,
    /// Sleep between frames to run at 60 Hz
    #[arg(long)]
    realtime: bool,
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

/// Per-session result
#[derive(Debug, Serialize)]
struct SessionSummary {
    score: u64,
    frames: u64,
    difficulty_level: f32,
    new_record: bool,
}

/// What the run printed at the end
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    sessions: Vec<SessionSummary>,
    high_score: u64,
    peak_vertices: usize,
}

fn main() {
    env_logger::init();
    log::info!("Jelly Slice (headless) starting...");

    let options = Options::parse();

    let settings = match &options.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let summary = run(&options, &settings);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}

fn run(options: &Options, settings: &Settings) -> RunSummary {
    let frame_time = Duration::from_secs(1) / FPS;
    let mut shake_rng = Pcg32::seed_from_u64(options.seed ^ 0x5eed);
    let mut high_score = HighScore::new();
    let mut session = Session::new(options.seed);
    let mut pilot = Autopilot::new();

    let mut sessions = Vec::new();
    let mut session_start = 0;
    let mut peak_vertices = 0;
    let mut frame = 0;

    while frame < options.frames && (sessions.len() as u32) < options.sessions {
        let started = Instant::now();

        // Input, then exactly one step, then the frame
        let snapshot = session.snapshot();
        for action in pilot.next_actions(&snapshot) {
            match action {
                PointerAction::Down(p) => session.on_pointer_down(p),
                PointerAction::Move(p) => {
                    session.on_pointer_move(p, &mut high_score);
                }
                PointerAction::Up => session.on_pointer_up(),
            }
        }
        session.advance_frame();
        frame += 1;

        let snapshot = session.snapshot();
        let shake = render::shake_offset(&snapshot, settings, &mut shake_rng);
        let vertices = render::build_frame(&snapshot, settings, shake);
        peak_vertices = peak_vertices.max(vertices.len());

        for event in session.drain_events() {
            match event {
                GameEvent::ComboReached(n) => log::debug!("Combo x{n}!"),
                GameEvent::SessionEnded { score, new_record } => {
                    log::info!("Game over: score {score} after {} frames", frame - session_start);
                    sessions.push(SessionSummary {
                        score,
                        frames: frame - session_start,
                        difficulty_level: snapshot.difficulty_level,
                        new_record,
                    });
                }
                _ => {}
            }
        }

        if session.is_ended() {
            session.reset();
            pilot = Autopilot::new();
            session_start = frame;
        }

        if options.realtime {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    if !session.is_ended() && frame > session_start {
        log::info!("Run stopped mid-session with score {}", session.score());
        sessions.push(SessionSummary {
            score: session.score(),
            frames: frame - session_start,
            difficulty_level: session.state().difficulty_level,
            new_record: high_score.report_high_score(session.score()),
        });
    }

    RunSummary {
        seed: options.seed,
        frames: frame,
        sessions,
        high_score: high_score.get_high_score(),
        peak_vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["jelly-slice"]).expect("defaults parse");
        assert_eq!(options.seed, 12345);
        assert_eq!(options.frames, 60 * 60 * 5);
        assert_eq!(options.sessions, 3);
        assert!(!options.realtime);
        assert!(options.settings.is_none());
    }

    #[test]
    fn test_flags_and_values() {
        let options = Options::try_parse_from([
            "jelly-slice",
            "--seed=5",
            "--frames",
            "120",
            "--realtime",
            "--settings",
            "prefs.json",
        ])
        .expect("arguments parse");
        assert_eq!(options.seed, 5);
        assert_eq!(options.frames, 120);
        assert!(options.realtime);
        assert_eq!(options.settings, Some(PathBuf::from("prefs.json")));
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(Options::try_parse_from(["jelly-slice", "--seed", "abc"]).is_err());
        assert!(Options::try_parse_from(["jelly-slice", "--bogus"]).is_err());
    }

    #[test]
    fn test_short_run_stops_at_frame_limit() {
        let options = Options::try_parse_from(["jelly-slice", "--frames=30", "--seed=9"])
            .expect("arguments parse");
        let summary = run(&options, &Settings::default());
        assert_eq!(summary.frames, 30);
        assert_eq!(summary.seed, 9);
        assert!(summary.peak_vertices > 0);
    }
}
