//! Dash Runner entry point
//!
//! Rendering lives in the host; natively this runs a headless autoplay
//! session and logs how each run went. Set `RUST_LOG=info` to see it.
//!
//! Usage: `dash-runner [fixed|variable]`

use dash_runner::consts::*;
use dash_runner::input::RawInput;
use dash_runner::sim::{GameEvent, Snapshot};
use dash_runner::{Game, Settings, TimestepMode};

/// Frames to simulate (about two minutes at 60 Hz)
const DEMO_FRAMES: u32 = 60 * 120;

/// Runs to play before stopping early
const DEMO_RUNS: u32 = 5;

fn main() {
    env_logger::init();
    log::info!("Dash Runner (headless) starting...");

    // Optional first argument picks the timestep: `fixed` or `variable`
    let mut settings = Settings::default();
    if let Some(arg) = std::env::args().nth(1) {
        match TimestepMode::from_str(&arg) {
            Some(mode) => settings.timestep = mode,
            None => log::warn!("Unknown timestep '{}', using {}", arg, settings.timestep.as_str()),
        }
    }
    let mut game = Game::new(&settings);
    let mut now_ms: u64 = 0;

    for _ in 0..DEMO_FRAMES {
        if let Some(input) = autopilot(&game.snapshot(), now_ms) {
            game.handle_input(input);
        }

        for event in game.frame(SIM_DT) {
            if let GameEvent::GameOver { score } = event {
                println!("Run {} over: score {}", game.runs_finished(), score);
            }
        }

        if game.runs_finished() >= DEMO_RUNS {
            break;
        }
        now_ms += (SIM_DT * 1000.0) as u64;
    }

    println!("\nSession high scores:");
    for (i, entry) in game.high_scores().entries.iter().enumerate() {
        println!(
            "{:>2}. {:>4}  ({:.2}s, size level {})",
            i + 1,
            entry.score,
            entry.elapsed_seconds,
            entry.size_level
        );
    }
}

/// Jump when the obstacle gets close; tap to restart after a crash
fn autopilot(snap: &Snapshot, now_ms: u64) -> Option<RawInput> {
    if snap.is_game_over {
        return Some(RawInput::Tap);
    }

    let player_right = snap.player_x + snap.player_width / 2.0;
    let gap = snap.obstacle_x - player_right;
    let lead = 0.12 + 0.02 * snap.speed_level as f32;
    if gap > 0.0 && gap < lead && (snap.player_y - snap.ground_y).abs() < GROUNDED_EPSILON {
        return Some(RawInput::SpaceDown {
            timestamp_ms: now_ms,
        });
    }
    None
}
