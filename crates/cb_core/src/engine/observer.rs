use crate::models::GameState;

/// Notification contract between the simulator and its single observer.
///
/// The simulator holds the observer as a `Weak` reference and never keeps
/// it alive; a dropped or unregistered observer simply stops delivery.
pub trait GameObserver: Send + Sync {
    /// Delivered once per tick and once on `end()`, with a fresh snapshot.
    fn on_update(&self, state: GameState);

    /// Delivered exactly once, only when the possession bound is exhausted
    /// during a tick (never by `end()`). Reserved hook; default is a no-op.
    fn on_complete(&self) {}
}
