pub mod clock;
pub mod commentary;
pub mod observer;
pub mod simulator;

pub use clock::Ticker;
pub use observer::GameObserver;
pub use simulator::{
    GameSimulator, SimConfig, SimPhase, StepOutcome, DEFAULT_POSSESSION_LIMIT,
    DEFAULT_TICK_INTERVAL,
};
