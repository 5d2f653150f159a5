//! Principal-change notification feed.
//!
//! DESIGN
//! ======
//! A feed remembers the current principal state and a list of listeners.
//! Subscribing hands the new listener the current state first, then every
//! later change in publish order. Each listener owns an unbounded mpsc
//! receiver, so a slow consumer never blocks the publisher and order is
//! preserved per listener.
//!
//! Dropping a [`PrincipalStream`] unsubscribes it; closed senders are pruned
//! on the next publish.

use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::principal::PrincipalChange;

/// Receiving end of a feed subscription.
#[derive(Debug)]
pub struct PrincipalStream {
    rx: mpsc::UnboundedReceiver<PrincipalChange>,
}

impl PrincipalStream {
    /// Wait for the next notification. Returns `None` once the feed is gone.
    pub async fn next(&mut self) -> Option<PrincipalChange> {
        self.rx.recv().await
    }
}

struct FeedInner {
    current: PrincipalChange,
    listeners: Vec<mpsc::UnboundedSender<PrincipalChange>>,
}

/// Listener registry that implements "principal changed" push semantics.
pub struct PrincipalFeed {
    inner: Mutex<FeedInner>,
}

impl PrincipalFeed {
    /// Create a feed whose current state is `initial`.
    #[must_use]
    pub fn new(initial: PrincipalChange) -> Self {
        Self { inner: Mutex::new(FeedInner { current: initial, listeners: Vec::new() }) }
    }

    /// Register a listener. It receives the current state immediately.
    pub fn subscribe(&self) -> PrincipalStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // Cannot fail: `rx` is still held here.
        let _ = tx.send(inner.current.clone());
        inner.listeners.push(tx);
        PrincipalStream { rx }
    }

    /// Record `change` as the current state and fan it out.
    ///
    /// Returns the number of listeners that received it.
    pub fn publish(&self, change: PrincipalChange) -> usize {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner
            .listeners
            .retain(|tx| tx.send(change.clone()).is_ok());
        inner.current = change;
        inner.listeners.len()
    }

    /// Snapshot of the current principal state.
    #[must_use]
    pub fn current(&self) -> PrincipalChange {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .current
            .clone()
    }

    /// Number of listeners that were open at the last publish or subscribe.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl Default for PrincipalFeed {
    fn default() -> Self {
        Self::new(PrincipalChange::SignedOut)
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
