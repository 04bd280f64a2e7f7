use crate::modules::recipes::core::events::RecipeEvent;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// Fan-out of recipe events to every live subscription.
#[derive(Clone)]
pub struct RecipeEvents {
    sender: broadcast::Sender<RecipeEvent>,
}

impl Default for RecipeEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecipeEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: RecipeEvent) -> usize {
        // No receivers is not an error: nobody is subscribed yet.
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecipeEvent> {
        self.sender.subscribe()
    }
}
