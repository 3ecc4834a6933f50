use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dashmap::DashMap;
use tokio::sync::oneshot;
use tower_lsp::jsonrpc::{Id, Response};

use crate::error::ChannelError;

/// Requests waiting for a response, keyed by JSON-RPC id.
///
/// Shared between request futures and the reader task.
#[derive(Clone, Default)]
pub(crate) struct PendingRequests {
    inner: Arc<DashMap<Id, oneshot::Sender<Response>>>,
    closed: Arc<AtomicBool>,
}

impl PendingRequests {
    /// Register `id` and return the slot its response will be delivered to.
    ///
    /// After [`close`](Self::close) the slot fails immediately.
    pub(crate) fn register(
        &self,
        id: Id,
    ) -> PendingResponse {
        let (tx, rx) = oneshot::channel();
        self.inner.insert(id.clone(), tx);
        // Close may have raced with the insert above.
        if self.closed.load(Ordering::Acquire) {
            self.inner.remove(&id);
        }
        PendingResponse {
            id,
            rx,
            requests: self.clone(),
        }
    }

    /// Route a response to its waiter. Returns `false` if nobody waits for it.
    pub(crate) fn complete(
        &self,
        response: Response,
    ) -> bool {
        let Some((_, sender)) = self.inner.remove(response.id()) else {
            return false;
        };
        // The waiter may have been dropped in the meantime.
        sender.send(response).is_ok()
    }

    /// Fail every current and future waiter with [`ChannelError::Closed`].
    pub(crate) fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.inner.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }
}

/// A registered request. Dropping it unregisters the id.
pub(crate) struct PendingResponse {
    id: Id,
    rx: oneshot::Receiver<Response>,
    requests: PendingRequests,
}

impl PendingResponse {
    pub(crate) async fn wait(mut self) -> Result<Response, ChannelError> {
        (&mut self.rx).await.map_err(|_| ChannelError::Closed)
    }
}

impl Drop for PendingResponse {
    fn drop(&mut self) {
        self.requests.inner.remove(&self.id);
    }
}

#[cfg(test)]
#[path = "../../tests/src/service/pending_tests.rs"]
mod tests;
