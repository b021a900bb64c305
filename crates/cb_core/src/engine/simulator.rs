//! Game simulator: possession-by-possession random scoring loop.
//!
//! The mutable core is poll-driven (`step()` advances exactly one
//! possession); `start()` attaches a [`Ticker`] that drives `step`
//! semantics on a fixed period, and `end()` finishes the game early with a
//! final scoreboard line.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::clock::Ticker;
use super::commentary;
use super::observer::GameObserver;
use crate::error::{CoreError, Result};
use crate::models::{default_away_team, default_home_team, GameState, Team};

/// Reference tick period: one possession every 2 seconds.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// A run completes once the possession counter exceeds this bound.
pub const DEFAULT_POSSESSION_LIMIT: u32 = 120;

/// Construction-time configuration for a [`GameSimulator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub home_team: Team,
    pub away_team: Team,
    pub tick_interval: Duration,
    pub possession_limit: u32,
    /// `Some` pins the RNG stream for reproducible runs; `None` seeds from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            home_team: default_home_team(),
            away_team: default_away_team(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            possession_limit: DEFAULT_POSSESSION_LIMIT,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        self.home_team.validate()?;
        self.away_team.validate()?;
        if self.tick_interval.is_zero() {
            return Err(CoreError::InvalidConfig("tick interval must be non-zero".to_string()));
        }
        if self.possession_limit == 0 {
            return Err(CoreError::InvalidConfig("possession limit must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Lifecycle state of the simulator's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// No clock attached; re-enterable via `start()`.
    Idle,
    /// Ticker attached and delivering possessions.
    Running,
}

/// Result of a single manual [`GameSimulator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No observer registered; nothing changed.
    Skipped,
    /// One possession played and delivered.
    Advanced,
    /// This possession exhausted the bound; completion delivered and the
    /// simulator reset.
    Completed,
}

/// What a single advance produced, resolved under the core lock but
/// delivered outside it so observer callbacks may re-enter the simulator.
enum TickDelivery {
    Skipped,
    Update { observer: Arc<dyn GameObserver>, state: GameState, completed: bool },
}

struct SimCore {
    home_team: Team,
    away_team: Team,
    home_score: u32,
    away_score: u32,
    home_possession: bool,
    possession_count: u32,
    possession_limit: u32,
    rng: ChaCha8Rng,
    observer: Option<Weak<dyn GameObserver>>,
    phase: SimPhase,
}

impl SimCore {
    fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            home_team: config.home_team.clone(),
            away_team: config.away_team.clone(),
            home_score: 0,
            away_score: 0,
            home_possession: true,
            possession_count: 0,
            possession_limit: config.possession_limit,
            rng,
            observer: None,
            phase: SimPhase::Idle,
        }
    }

    fn observer(&self) -> Option<Arc<dyn GameObserver>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }

    /// Play one possession. Without a live observer the tick is skipped
    /// with no state change.
    fn advance(&mut self) -> TickDelivery {
        let observer = match self.observer() {
            Some(observer) => observer,
            None => return TickDelivery::Skipped,
        };

        let points: u32 = self.rng.gen_range(0..=3);
        let scoring_is_home = self.home_possession;
        if scoring_is_home {
            self.home_score += points;
        } else {
            self.away_score += points;
        }

        let scoring_team = if scoring_is_home { &self.home_team } else { &self.away_team };
        let player = scoring_team.random_player(&mut self.rng).to_string();
        let last_action = commentary::last_action(&player, points);
        let scoring_team_name = scoring_team.name.clone();

        self.home_possession = !self.home_possession;
        self.possession_count += 1;
        trace!(
            possession = self.possession_count,
            points,
            home = self.home_score,
            away = self.away_score,
            "possession played"
        );

        let state =
            GameState::new(self.home_score, self.away_score, scoring_team_name, last_action);

        let completed = self.possession_count > self.possession_limit;
        if completed {
            debug!(home = self.home_score, away = self.away_score, "possession bound exhausted");
            self.reset_state();
        }

        TickDelivery::Update { observer, state, completed }
    }

    /// Finish the game with the current scores, then reset.
    ///
    /// Winner is the strictly greater score; home wins ties.
    fn end_game(&mut self) -> (Option<Arc<dyn GameObserver>>, GameState) {
        let winner =
            if self.away_score > self.home_score { &self.away_team } else { &self.home_team };
        let state = GameState::new(
            self.home_score,
            self.away_score,
            winner.name.clone(),
            commentary::game_over(&winner.name),
        );

        let observer = self.observer();
        self.reset_state();
        (observer, state)
    }

    fn reset_state(&mut self) {
        self.home_score = 0;
        self.away_score = 0;
        self.possession_count = 0;
        self.home_possession = true;
        self.phase = SimPhase::Idle;
    }
}

/// Timer-driven two-team scoring simulator.
///
/// Holds its observer weakly and never keeps it alive. All mutation is
/// serialized through one lock, so a clock tick and an `end()` call can
/// never interleave their reads and writes.
pub struct GameSimulator {
    core: Arc<Mutex<SimCore>>,
    ticker: Mutex<Option<Ticker>>,
    tick_interval: Duration,
}

impl GameSimulator {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let tick_interval = config.tick_interval;
        Ok(Self {
            core: Arc::new(Mutex::new(SimCore::new(&config))),
            ticker: Mutex::new(None),
            tick_interval,
        })
    }

    /// Register the single observer. Replaces any previous registration.
    pub fn set_observer<O: GameObserver + 'static>(&self, observer: &Arc<O>) {
        let weak: Weak<dyn GameObserver> = Arc::downgrade(observer) as Weak<O>;
        self.lock_core().observer = Some(weak);
    }

    pub fn clear_observer(&self) {
        self.lock_core().observer = None;
    }

    /// Attach the repeating clock. Any already-running clock is stopped and
    /// replaced, so calling `start()` twice never doubles the tick rate.
    pub fn start(&self) {
        let mut slot = self.lock_ticker();
        if let Some(previous) = slot.take() {
            previous.stop();
        }
        self.lock_core().phase = SimPhase::Running;
        debug!(interval_ms = self.tick_interval.as_millis() as u64, "simulation clock started");

        let core = Arc::clone(&self.core);
        *slot = Some(Ticker::spawn(self.tick_interval, move || Self::clock_tick(&core)));
    }

    /// Finish the game now: deliver the final scoreboard via `on_update`
    /// (never `on_complete`), cancel the clock, and reset.
    pub fn end(&self) {
        if let Some(ticker) = self.lock_ticker().take() {
            ticker.stop();
        }
        let (observer, final_state) = self.lock_core().end_game();
        debug!(last_action = %final_state.last_action, "game ended");
        if let Some(observer) = observer {
            observer.on_update(final_state);
        }
    }

    /// Play exactly one possession without the clock.
    ///
    /// Poll-driving counterpart to `start()`: a host that owns its own loop
    /// calls this instead of attaching the ticker.
    pub fn step(&self) -> StepOutcome {
        let delivery = self.lock_core().advance();
        match Self::deliver(delivery) {
            None => StepOutcome::Skipped,
            Some(false) => StepOutcome::Advanced,
            Some(true) => StepOutcome::Completed,
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.lock_core().phase
    }

    /// Current `(home, away)` scores.
    pub fn score(&self) -> (u32, u32) {
        let core = self.lock_core();
        (core.home_score, core.away_score)
    }

    pub fn possession_count(&self) -> u32 {
        self.lock_core().possession_count
    }

    /// `(home, away)` display names.
    pub fn team_names(&self) -> (String, String) {
        let core = self.lock_core();
        (core.home_team.name.clone(), core.away_team.name.clone())
    }

    /// One clock tick. Breaks the ticker loop once the run leaves the
    /// Running phase (completion, or an `end()`/manual completion that beat
    /// this tick to the lock).
    fn clock_tick(core: &Arc<Mutex<SimCore>>) -> ControlFlow<()> {
        let delivery = {
            let mut core = core.lock().expect("sim core lock poisoned");
            if core.phase != SimPhase::Running {
                return ControlFlow::Break(());
            }
            core.advance()
        };
        match Self::deliver(delivery) {
            Some(true) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    /// Run observer callbacks outside the core lock. Returns the completed
    /// flag, or `None` for a skipped tick.
    fn deliver(delivery: TickDelivery) -> Option<bool> {
        match delivery {
            TickDelivery::Skipped => None,
            TickDelivery::Update { observer, state, completed } => {
                observer.on_update(state);
                if completed {
                    observer.on_complete();
                }
                Some(completed)
            }
        }
    }

    fn lock_core(&self) -> std::sync::MutexGuard<'_, SimCore> {
        self.core.lock().expect("sim core lock poisoned")
    }

    fn lock_ticker(&self) -> std::sync::MutexGuard<'_, Option<Ticker>> {
        self.ticker.lock().expect("ticker slot lock poisoned")
    }

    #[cfg(test)]
    pub(crate) fn force_scores(&self, home: u32, away: u32) {
        let mut core = self.lock_core();
        core.home_score = home;
        core.away_score = away;
    }
}
