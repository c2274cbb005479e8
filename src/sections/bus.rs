use tokio::sync::broadcast;

/// In-process publish/subscribe registry for content-update notifications.
///
/// Mutation handlers publish exactly one signal after a successful write;
/// every live section binding holds one subscription and re-resolves on each
/// signal. The signal carries no payload: subscribers re-fetch their own
/// section unconditionally rather than inspecting what changed. Subscribers
/// that attach later simply perform their own initial fetch; missed signals
/// are not replayed.
#[derive(Debug, Clone)]
pub struct ContentUpdates {
    tx: broadcast::Sender<()>,
}

impl ContentUpdates {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Fire-and-forget fan-out to whoever is subscribed right now.
    pub fn publish(&self) {
        let _ = self.tx.send(());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ContentUpdates {
    fn default() -> Self {
        Self::new()
    }
}
