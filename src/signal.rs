use std::time::Instant;

use flume::{Receiver, RecvTimeoutError, Sender};

/// A broadcast wake-up.
///
/// Nothing is ever sent on the channel. Listeners hold a clone of the
/// receiver and wake up when the sender is dropped, which happens when the
/// signal is replaced by `broadcast`. A listener taken before the lock is
/// released can therefore never miss a broadcast that happens after.
#[derive(Debug)]
pub(crate) struct Signal {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Signal {
    pub(crate) fn new() -> Self {
        let (tx, rx) = flume::bounded(0);
        Self { tx, rx }
    }

    pub(crate) fn listen(&self) -> Listener {
        Listener(self.rx.clone())
    }

    /// Number of listeners registered with the current generation.
    pub(crate) fn waiters(&self) -> usize {
        // Don't count our own receiver
        self.tx.receiver_count() - 1
    }

    /// Wake every current listener.
    pub(crate) fn broadcast(&mut self) {
        if self.waiters() > 0 {
            *self = Self::new();
        }
    }
}

/// A registration with one generation of a `Signal`.
///
/// Dropping a listener unregisters it.
#[derive(Debug)]
pub(crate) struct Listener(Receiver<()>);

impl Listener {
    pub(crate) fn wait(self) {
        let _ = self.0.recv();
    }

    /// Returns `false` if the deadline passed before a broadcast.
    pub(crate) fn wait_deadline(self, deadline: Instant) -> bool {
        !matches!(self.0.recv_deadline(deadline), Err(RecvTimeoutError::Timeout))
    }

    pub(crate) async fn wait_async(self) {
        let _ = self.0.recv_async().await;
    }
}
