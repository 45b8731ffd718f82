//! Lane Rush headless runner
//!
//! Plays a session with the autopilot at a fixed timestep, saving once
//! through the pause menu partway in, and logs what happened.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use lane_rush::consts::SIM_DT;
use lane_rush::persistence::FileSlot;
use lane_rush::renderer::RecordingFrameBuffer;
use lane_rush::sim::{
    FrameInput, GameEvent, GamePhase, GameState, Level, MenuChoice, TickOutcome,
};
use lane_rush::{Session, Settings};

const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Parser, Debug)]
#[command(name = "lane-rush")]
#[command(about = "Run a headless Lane Rush session under the autopilot")]
struct Cli {
    /// JSON settings file. When omitted, `settings.json` is used if present.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the wave layout seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the save file location
    #[arg(long)]
    save_path: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 10)]
    frames: u64,
    /// Pause and save at this frame
    #[arg(long, default_value_t = 600)]
    save_at: u64,
}

/// What the runner is doing with the input this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Autopilot,
    Saving,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::try_load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::load(Path::new(DEFAULT_SETTINGS_PATH)),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(path) = cli.save_path {
        settings.save_path = path;
    }

    let slot = FileSlot::new(settings.save_path.clone());
    let mut session = Session::new(settings, RecordingFrameBuffer::default(), slot);
    log::info!("Lane Rush (headless) starting...");

    let autopilot = FrameInput {
        autopilot: true,
        ..Default::default()
    };
    let mut script = Script::Autopilot;
    let mut hits = 0u32;
    let mut escaped = 0u32;

    for frame in 0..cli.frames {
        if frame == cli.save_at {
            script = Script::Saving;
        }

        let input = match script {
            Script::Autopilot => autopilot.clone(),
            Script::Saving => save_input(&session.state),
        };

        if session.frame(&input, SIM_DT) == TickOutcome::Quit {
            break;
        }

        for event in session.drain_events() {
            match event {
                GameEvent::PlayerHit { lives_left } => {
                    hits += 1;
                    log::info!("Hit at frame {frame}, {lives_left} lives left");
                }
                GameEvent::EnemyEscaped => escaped += 1,
                GameEvent::Saved => {
                    log::info!("Saved at frame {frame}");
                    script = Script::Autopilot;
                }
                GameEvent::SaveFailed => script = Script::Autopilot,
                GameEvent::LevelStarted(level) => log::info!("{} at frame {frame}", level.tag()),
                _ => {}
            }
        }

        let state = &session.state;
        let finished = state.phase == GamePhase::Lost
            || (state.phase == GamePhase::Won && state.level == Level::Level5);
        if finished {
            break;
        }
    }

    let state = &session.state;
    log::info!(
        "Finished: {:?} on {} after {} frames, score {}, lives {}, {} hits, {} cars passed",
        state.phase,
        state.level.tag(),
        state.time_frames,
        state.score,
        state.player.lives,
        hits,
        escaped
    );
    println!(
        "{:?} {} score={} lives={}",
        state.phase,
        state.level.tag(),
        state.score,
        state.player.lives
    );

    Ok(())
}

/// Pause, walk the menu down to Save and confirm it
fn save_input(state: &GameState) -> FrameInput {
    let mut input = FrameInput::default();
    match state.phase {
        GamePhase::Ongoing => input.pause = true,
        GamePhase::Start | GamePhase::Pause => {
            if state.menu.choice == MenuChoice::Save {
                input.confirm = true;
            } else {
                input.down = true;
            }
        }
        GamePhase::Won | GamePhase::Lost => {}
    }
    input
}
