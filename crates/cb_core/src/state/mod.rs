//! Latest-state holder.
//!
//! `GameModel` is the simulator's observer: a single slot holding the most
//! recent [`GameState`], republished to any number of subscribers. A
//! display layer binds a subscriber (or polls `latest()`) and re-renders on
//! every replacement.

use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::engine::GameObserver;
use crate::models::GameState;

type StateCallback = Box<dyn Fn(&GameState) + Send + Sync>;

pub struct GameModel {
    state: RwLock<GameState>,
    subscribers: Mutex<Vec<StateCallback>>,
}

impl GameModel {
    /// The simulator holds observers weakly, so the model is handed out as
    /// an `Arc` the caller owns.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(GameState::default()),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Clone of the most recently published snapshot.
    pub fn latest(&self) -> GameState {
        self.state.read().expect("game state lock poisoned").clone()
    }

    /// Register a callback invoked with every replacement of the slot.
    pub fn subscribe(&self, callback: impl Fn(&GameState) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .expect("subscriber list lock poisoned")
            .push(Box::new(callback));
    }
}

impl GameObserver for GameModel {
    fn on_update(&self, state: GameState) {
        *self.state.write().expect("game state lock poisoned") = state.clone();
        let subscribers = self.subscribers.lock().expect("subscriber list lock poisoned");
        for callback in subscribers.iter() {
            callback(&state);
        }
    }

    fn on_complete(&self) {
        // Reserved hook: a display layer may use this to disable input or
        // show a summary.
        debug!("game complete");
    }
}
