//! Session store: folds the identity notification stream into a `Session`.
//!
//! ARCHITECTURE
//! ============
//! One fold task per store owns the stream. Snapshots are published through
//! a `watch` channel so readers always see the last applied value, including
//! while a login or logout call is still waiting on the identity service.
//!
//! LIFECYCLE
//! =========
//! `attach` subscribes once; `teardown` aborts the fold task and waits for
//! it, which drops the stream. Nothing from the identity service can change
//! the session after `teardown` returns.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use identity::PrincipalStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::session::Session;

/// Shared read access to the session, plus crate-internal writes.
#[derive(Clone)]
pub struct SessionHandle {
    tx: Arc<watch::Sender<Session>>,
}

impl SessionHandle {
    fn new() -> Self {
        let (tx, _) = watch::channel(Session::default());
        Self { tx: Arc::new(tx) }
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every session change.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut Session)) {
        self.tx.send_modify(f);
    }
}

pub struct SessionStore {
    handle: SessionHandle,
    task: JoinHandle<()>,
}

impl SessionStore {
    /// Start folding `stream` into a fresh session.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn attach(stream: PrincipalStream) -> Self {
        let handle = SessionHandle::new();
        let task = tokio::spawn(fold(stream, handle.clone()));
        Self { handle, task }
    }

    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Stop tracking identity changes. The last session value stays readable
    /// through existing handles.
    pub async fn teardown(self) {
        self.task.abort();
        // Cancellation is the expected outcome.
        let _ = self.task.await;
        tracing::debug!("session store torn down");
    }
}

async fn fold(mut stream: PrincipalStream, handle: SessionHandle) {
    while let Some(change) = stream.next().await {
        tracing::debug!(signed_in = change.principal().is_some(), "principal change");
        handle.update(|session| *session = session.apply(&change));
    }
    tracing::warn!("principal stream closed; session no longer follows identity changes");
}
