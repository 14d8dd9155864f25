// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped listener ownership.

use core::marker::PhantomData;

use smallvec::SmallVec;
use understory_event_state::listener::{Listener, ListenerHost, ListenerId};

/// A set of attached listeners that must be disposed together.
///
/// Dropping a non-empty set cannot detach (there is no host to talk to), so
/// it is reported with `tracing::warn!` instead. Call [`Subscriptions::dispose`]
/// on every exit path.
#[derive(Debug)]
pub struct Subscriptions<K> {
    ids: SmallVec<[ListenerId; 8]>,
    _host: PhantomData<fn(K)>,
}

impl<K> Default for Subscriptions<K> {
    fn default() -> Self {
        Self {
            ids: SmallVec::new(),
            _host: PhantomData,
        }
    }
}

impl<K: core::fmt::Debug> Subscriptions<K> {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` for `target` and take ownership of the registration.
    pub fn attach<H>(&mut self, host: &mut H, target: K, listener: Listener) -> ListenerId
    where
        H: ListenerHost<K> + ?Sized,
    {
        tracing::debug!(?target, ?listener, "attaching listener");
        let id = host.attach(target, listener);
        self.ids.push(id);
        id
    }

    /// Whether no listeners are held.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of listeners held.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Detach every held listener. Disposing an empty set is a no-op.
    pub fn dispose<H>(&mut self, host: &mut H)
    where
        H: ListenerHost<K> + ?Sized,
    {
        if self.ids.is_empty() {
            return;
        }
        tracing::debug!(count = self.ids.len(), "detaching listeners");
        for id in self.ids.drain(..) {
            host.detach(id);
        }
    }
}

impl<K> Drop for Subscriptions<K> {
    fn drop(&mut self) {
        if !self.ids.is_empty() {
            tracing::warn!(count = self.ids.len(), "listeners dropped without dispose");
        }
    }
}
