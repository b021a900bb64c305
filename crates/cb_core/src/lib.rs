//! # cb_core - Timer-driven basketball score simulation engine
//!
//! A two-team scoring simulator driven by a fixed-interval clock. Each tick
//! plays one possession: a random point draw is credited to the possession
//! holder, a commentary line names a random player from the scoring roster,
//! and the resulting scoreboard snapshot is delivered to a single observer.
//! The run completes when the possession bound is exhausted, or earlier via
//! an explicit `end()`.
//!
//! ## Features
//! - Reproducible runs (same seed = same scoreboard)
//! - Real-time clock driver or host-owned polling via `step()`
//! - Weakly-held observer: delivery stops when the observer is dropped

pub mod engine;
pub mod error;
pub mod models;
pub mod state;

pub use engine::{
    GameObserver, GameSimulator, SimConfig, SimPhase, StepOutcome, DEFAULT_POSSESSION_LIMIT,
    DEFAULT_TICK_INTERVAL,
};
pub use error::{CoreError, Result};
pub use models::{default_away_team, default_home_team, GameState, Team};
pub use state::GameModel;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_game_through_public_api() {
        let config = SimConfig { possession_limit: 8, seed: Some(42), ..SimConfig::default() };
        let sim = GameSimulator::new(config).expect("simulator config valid");
        let model = GameModel::new();
        sim.set_observer(&model);

        let mut ticks = 0;
        while sim.step() != StepOutcome::Completed {
            ticks += 1;
            assert!(ticks < 100, "run should complete at the possession bound");
        }

        // Completion reset the simulator; the model keeps the last snapshot.
        assert_eq!(sim.score(), (0, 0));
        assert_eq!(sim.phase(), SimPhase::Idle);
        assert!(!model.latest().last_action.is_empty());
    }

    #[test]
    fn test_same_seed_same_scoreboard() {
        let run = |seed: u64| {
            let sim = GameSimulator::new(SimConfig { seed: Some(seed), ..SimConfig::default() })
                .expect("simulator config valid");
            let model = GameModel::new();
            sim.set_observer(&model);
            for _ in 0..25 {
                sim.step();
            }
            model.latest()
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8), "different seeds should diverge quickly");
    }
}
