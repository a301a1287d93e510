//! Unbuffered, single-producer / multi-consumer handoff.
//!
//! ## Overview
//! ```text
//! Sender::send(v) ──► [slot] ──► Receiver::recv()   (one of N clones)
//!        ▲                              │
//!        └──────────── taken ◄──────────┘
//! ```
//!
//! ## Contracts
//! - `send` completes only after some receiver took the value.
//! - Every value is delivered to exactly one receiver.
//! - Only the [`Sender`] closes the queue, explicitly or by being dropped.
//! - Receivers drain a value left in the slot before observing closure; once `recv`
//!   returned `None` it keeps returning `None`.

mod stream;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::Notify;
use tracing::{debug, trace};

/// Returned by [`Sender::send`] when nobody can take the value any more.
/// The value is handed back.
#[derive(Error, PartialEq, Eq)]
#[error("queue is closed or has no receivers")]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SendError(..)")
    }
}

struct Shared<T> {
    state: Mutex<State<T>>,
    /// A value was offered or the queue closed.
    offered: Notify,
    /// The offered value was taken or the last receiver left.
    taken: Notify,
}

struct State<T> {
    slot: Option<T>,
    closed: bool,
    receivers: usize,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create a connected sender/receiver pair.
pub fn queue<T>() -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        state: Mutex::new(State {
            slot: None,
            closed: false,
            receivers: 1,
        }),
        offered: Notify::new(),
        taken: Notify::new(),
    });
    (
        Sender {
            shared: Arc::clone(&shared),
        },
        Receiver { shared },
    )
}

/// Write end. Not `Clone`: the single producer is the only party allowed to close.
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Sender<T> {
    /// Hand `value` to a receiver, waiting until one has taken it.
    ///
    /// Fails if the queue is closed, or if every receiver is dropped before the
    /// value is taken.
    pub async fn send(&mut self, value: T) -> Result<(), SendError<T>> {
        let mut pending = Some(value);
        loop {
            let taken = self.shared.taken.notified();
            tokio::pin!(taken);
            taken.as_mut().enable();

            {
                let mut st = self.shared.lock();
                match pending.take() {
                    Some(value) => {
                        if st.closed || st.receivers == 0 {
                            return Err(SendError(value));
                        }
                        if st.slot.is_some() {
                            // an abandoned send still owns the slot
                            pending = Some(value);
                        } else {
                            st.slot = Some(value);
                            self.shared.offered.notify_one();
                        }
                    }
                    None => {
                        if st.slot.is_none() {
                            return Ok(());
                        }
                        if st.receivers == 0
                            && let Some(value) = st.slot.take()
                        {
                            return Err(SendError(value));
                        }
                    }
                }
            }

            taken.await;
        }
    }

    /// Signal that no more values will be sent. Idempotent.
    pub fn close(&self) {
        {
            let mut st = self.shared.lock();
            if st.closed {
                return;
            }
            st.closed = true;
        }
        debug!("queue closed by sender");
        self.shared.offered.notify_waiters();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.shared.lock().receivers
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Read end. Clones share the same queue; each value reaches exactly one of them.
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Receiver<T> {
    /// Next value, or `None` once the queue is closed and drained.
    pub async fn recv(&self) -> Option<T> {
        loop {
            let offered = self.shared.offered.notified();
            tokio::pin!(offered);
            offered.as_mut().enable();

            {
                let mut st = self.shared.lock();
                if let Some(value) = st.slot.take() {
                    drop(st);
                    self.shared.taken.notify_one();
                    trace!("value taken from queue");
                    return Some(value);
                }
                if st.closed {
                    return None;
                }
            }

            offered.await;
        }
    }

    /// `true` once the sender closed the queue. A value may still be waiting in the slot.
    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        self.shared.lock().receivers += 1;
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        let last = {
            let mut st = self.shared.lock();
            st.receivers -= 1;
            st.receivers == 0
        };
        if last {
            trace!("last receiver dropped");
            self.shared.taken.notify_one();
        }
    }
}
