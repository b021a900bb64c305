//! Courtball console runner.
//!
//! Runs one simulated game to completion, printing the scoreboard after
//! every possession. By default the real clock drives the game; `--no-clock`
//! polls the simulator in a tight loop instead.

use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cb_core::{GameModel, GameObserver, GameSimulator, GameState, SimConfig, StepOutcome};

#[derive(Parser)]
#[command(name = "cb_cli")]
#[command(about = "Run a timer-driven courtball score simulation", long_about = None)]
struct Cli {
    /// Tick period in milliseconds
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Poll the simulator in a loop instead of attaching the clock thread
    #[arg(long, default_value_t = false)]
    no_clock: bool,

    /// Emit JSON snapshot lines instead of the human scoreboard
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Forwards snapshots to the [`GameModel`] and signals the main thread when
/// the possession bound is exhausted.
struct ConsoleBridge {
    model: Arc<GameModel>,
    done: Mutex<mpsc::Sender<()>>,
}

impl GameObserver for ConsoleBridge {
    fn on_update(&self, state: GameState) {
        self.model.on_update(state);
    }

    fn on_complete(&self) {
        self.model.on_complete();
        let _ = self.done.lock().expect("done sender lock poisoned").send(());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = SimConfig {
        tick_interval: Duration::from_millis(cli.interval_ms),
        seed: cli.seed,
        ..SimConfig::default()
    };
    let sim = GameSimulator::new(config)?;
    let (home_name, away_name) = sim.team_names();

    let model = GameModel::new();
    let json = cli.json;
    let (banner_home, banner_away) = (home_name.clone(), away_name.clone());
    model.subscribe(move |state| {
        if json {
            if let Ok(line) = serde_json::to_string(state) {
                println!("{}", line);
            }
        } else {
            println!(
                "{} {:>3} - {:<3} {} | {}",
                banner_home, state.home_score, state.away_score, banner_away, state.last_action
            );
        }
    });

    info!(home = %home_name, away = %away_name, "starting game");

    if cli.no_clock {
        sim.set_observer(&model);
        while sim.step() != StepOutcome::Completed {}
    } else {
        let (done_tx, done_rx) = mpsc::channel();
        let bridge =
            Arc::new(ConsoleBridge { model: Arc::clone(&model), done: Mutex::new(done_tx) });
        sim.set_observer(&bridge);
        sim.start();
        done_rx.recv()?;
    }

    let last = model.latest();
    if !json {
        println!(
            "Final: {} {} - {} {}",
            home_name, last.home_score, last.away_score, away_name
        );
    }

    Ok(())
}
