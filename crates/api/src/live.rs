// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Saved-ledger notifications.
//!
//! Events are informational only. They are published after a mutation has
//! been persisted and never carry ledger contents; observers read the
//! ledger through the store.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// Ledger change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A mutation was persisted.
    Saved {
        /// The ledger key that was written.
        ledger_key: String,
        /// The name of the persisted action.
        action: String,
        /// How many save attempts it took.
        attempts: u32,
    },
}

/// Broadcaster for ledger events.
///
/// This is a lightweight wrapper around `tokio::sync::broadcast`. Receivers
/// that fall behind lose the oldest events.
#[derive(Debug, Clone)]
pub struct LedgerEventBroadcaster {
    tx: broadcast::Sender<LedgerEvent>,
}

impl LedgerEventBroadcaster {
    /// Creates a new broadcaster buffering up to `capacity` events.
    ///
    /// A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Broadcasts an event to all subscribers.
    ///
    /// If nobody is subscribed, the event is dropped.
    pub fn broadcast(&self, event: &LedgerEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast ledger event");
            }
            Err(_) => {
                debug!(?event, "No receivers for ledger event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.tx.subscribe()
    }
}
