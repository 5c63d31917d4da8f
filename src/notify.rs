use std::collections::HashMap;

use futures::Stream;
use tokio::sync::{RwLock, broadcast};
use tracing::debug;

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-process broadcast of change events, keyed by event name.
///
/// Each subscriber gets its own receiver and sees only payloads
/// published after it subscribed, in publish order. Dropping a receiver
/// ends that subscription; publishing with no listeners is a no-op.
pub struct ChangeNotifier<T> {
    channels: RwLock<HashMap<String, broadcast::Sender<T>>>,
    capacity: usize,
}

impl<T: Clone + Send + 'static> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { channels: RwLock::new(HashMap::new()), capacity }
    }

    /// Deliver `payload` to every current subscriber of `event`.
    pub async fn publish(&self, event: &str, payload: T) {
        let channels = self.channels.read().await;
        if let Some(sender) = channels.get(event) {
            // Err means every receiver is gone; fire-and-forget.
            let delivered = sender.send(payload).unwrap_or(0);
            debug!(event, delivered, "event published");
        } else {
            debug!(event, "event published with no subscribers");
        }
    }

    /// Register a new subscriber for `event`.
    pub async fn subscribe(&self, event: &str) -> broadcast::Receiver<T> {
        if let Some(sender) = self.channels.read().await.get(event) {
            return sender.subscribe();
        }

        let mut channels = self.channels.write().await;
        channels
            .entry(event.to_string())
            .or_insert_with(|| {
                debug!(event, "event channel created");
                broadcast::channel(self.capacity).0
            })
            .subscribe()
    }
}

/// Adapt a subscription receiver into a stream of payloads.
///
/// A subscriber that falls more than the channel capacity behind skips
/// the overwritten events and keeps going.
pub fn into_stream<T: Clone + Send + 'static>(
    mut rx: broadcast::Receiver<T>,
) -> impl Stream<Item = T> {
    async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(payload) => yield payload,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

impl<T: Clone + Send + 'static> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
