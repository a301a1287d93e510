//! Counting completion barrier.
//!
//! A barrier sized to `n` hands out at most `n` [`CompletionToken`]s. Each token
//! counts down exactly once when dropped, so a task releases its slot on every exit
//! path, panics included. [`CompletionBarrier::wait`] resumes once the count hits zero.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;
use tracing::{debug, trace};

use crate::error::CoreError;

struct Inner {
    capacity: usize,
    issued: AtomicUsize,
    remaining: AtomicUsize,
    releases: AtomicUsize,
    notify: Notify,
}

pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

impl CompletionBarrier {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity,
                issued: AtomicUsize::new(0),
                remaining: AtomicUsize::new(capacity),
                releases: AtomicUsize::new(usize::from(capacity == 0)),
                notify: Notify::new(),
            }),
        }
    }

    /// Hand out the next token; fails once `capacity` tokens exist.
    pub fn token(&self) -> Result<CompletionToken, CoreError> {
        let capacity = self.inner.capacity;
        self.inner
            .issued
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < capacity).then_some(n + 1)
            })
            .map_err(|_| CoreError::BarrierOverflow { capacity })?;

        Ok(CompletionToken {
            inner: Arc::clone(&self.inner),
        })
    }

    /// Suspend until every slot has been released.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.is_released() {
                return;
            }
            notified.await;
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Slots not yet released.
    pub fn remaining(&self) -> usize {
        self.inner.remaining.load(Ordering::Acquire)
    }

    pub fn is_released(&self) -> bool {
        self.remaining() == 0
    }

    /// How many times the count reached zero; never more than one.
    pub fn releases(&self) -> usize {
        self.inner.releases.load(Ordering::Acquire)
    }
}

/// One outstanding task. Dropping it counts the barrier down.
pub struct CompletionToken {
    inner: Arc<Inner>,
}

impl Drop for CompletionToken {
    fn drop(&mut self) {
        let prev = self.inner.remaining.fetch_sub(1, Ordering::AcqRel);
        trace!(remaining = prev - 1, "completion token released");
        if prev == 1 {
            self.inner.releases.fetch_add(1, Ordering::AcqRel);
            debug!(capacity = self.inner.capacity, "completion barrier released");
            self.inner.notify.notify_waiters();
        }
    }
}
