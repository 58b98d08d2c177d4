//! Writer-Priority Admission Control
//!
//! Guards a value with a readers-writer lock plus a counter of *pending* writers.
//!
//! ## Protocol
//! 1. A writer registers (`register_writer`) before it tries to take the lock.
//! 2. A new reader waits until no writer is registered, then takes the shared lock.
//! 3. The writer takes the exclusive lock, mutates, releases the lock, and only then
//!    unregisters.
//!
//! Consequently any registered writer holds back every reader that arrives after the
//! registration, while readers already holding the shared lock finish normally.
//! Writers are not ordered among themselves beyond what `tokio::sync::RwLock` provides.

use std::ops::{Deref, DerefMut};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard, watch};

pub struct AdmissionController<T> {
    data: RwLock<T>,
    /// Number of registered writers that have not finished yet.
    pending: watch::Sender<usize>,
}

impl<T> AdmissionController<T> {
    pub fn new(data: T) -> Self {
        let (pending, _) = watch::channel(0);
        Self {
            data: RwLock::new(data),
            pending,
        }
    }

    /// Declares write intent. New readers are held back until the returned
    /// registration is dropped.
    pub fn register_writer(&self) -> WriterRegistration<'_> {
        self.pending.send_modify(|count| *count += 1);
        WriterRegistration {
            pending: &self.pending,
        }
    }

    /// Takes the exclusive lock on behalf of a registered writer.
    ///
    /// The registration moves into the guard and is released after the lock.
    pub async fn acquire_write<'a>(
        &'a self,
        registration: WriterRegistration<'a>,
    ) -> WriteGuard<'a, T> {
        let guard = self.data.write().await;
        WriteGuard {
            guard,
            _registration: registration,
        }
    }

    /// Registers and acquires in one step.
    pub async fn write(&self) -> WriteGuard<'_, T> {
        let registration = self.register_writer();
        self.acquire_write(registration).await
    }

    /// Waits for the pending-writer count to drain, then takes the shared lock.
    pub async fn acquire_read(&self) -> RwLockReadGuard<'_, T> {
        let mut pending = self.pending.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        if pending.wait_for(|count| *count == 0).await.is_err() {
            tracing::error!("Pending-writer channel closed while waiting to read");
        }
        self.data.read().await
    }

    pub fn pending_writers(&self) -> usize {
        *self.pending.borrow()
    }

    /// Direct access for single-owner setup before the value is shared.
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

/// Proof that a writer is registered. Dropping it unregisters the writer, even if the
/// write lock was never taken (e.g. the request future was cancelled).
pub struct WriterRegistration<'a> {
    pending: &'a watch::Sender<usize>,
}

impl Drop for WriterRegistration<'_> {
    fn drop(&mut self) {
        self.pending.send_modify(|count| *count -= 1);
    }
}

/// Exclusive access to the guarded value.
///
/// Field order matters: the lock guard is dropped before the registration.
pub struct WriteGuard<'a, T> {
    guard: RwLockWriteGuard<'a, T>,
    _registration: WriterRegistration<'a>,
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
