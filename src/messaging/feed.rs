//! Live snapshot feeds over the message board.
//!
//! A feed is a cancellable subscription producing a lazy sequence of
//! full-collection snapshots: the first `next()` returns the current state
//! immediately, every later one waits for a board change and returns the
//! state as of then. Consumers always receive whole collections, never
//! deltas. Dropping a feed (or calling `cancel`) detaches its listener
//! deterministically; the board's `subscriber_count` reflects that at once.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::board::{BoardSnapshot, conversations_in_snapshot, messages_in_snapshot};
use crate::models::{Conversation, Message};

/// Feed of one user's conversation list, newest-updated first.
pub struct ConversationFeed {
    state: Arc<Mutex<BoardSnapshot>>,
    changes: broadcast::Receiver<()>,
    user_id: String,
    primed: bool,
}

impl ConversationFeed {
    pub(super) fn new(
        state: Arc<Mutex<BoardSnapshot>>,
        changes: broadcast::Receiver<()>,
        user_id: String,
    ) -> Self {
        Self { state, changes, user_id, primed: false }
    }

    /// Next snapshot, or `None` once the board has been dropped.
    pub async fn next(&mut self) -> Option<Vec<Conversation>> {
        if self.primed {
            match self.changes.recv().await {
                Ok(()) => {}
                // Missed ticks collapse into the latest snapshot anyway.
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => return None,
            }
        }
        self.primed = true;
        Some(conversations_in_snapshot(&self.state.lock(), &self.user_id))
    }

    /// Detach the listener. Equivalent to dropping the feed.
    pub fn cancel(self) {}
}

/// Feed of one thread's messages, oldest first.
pub struct MessageFeed {
    state: Arc<Mutex<BoardSnapshot>>,
    changes: broadcast::Receiver<()>,
    conversation_id: String,
    primed: bool,
}

impl MessageFeed {
    pub(super) fn new(
        state: Arc<Mutex<BoardSnapshot>>,
        changes: broadcast::Receiver<()>,
        conversation_id: String,
    ) -> Self {
        Self { state, changes, conversation_id, primed: false }
    }

    /// Next snapshot, or `None` once the board has been dropped.
    pub async fn next(&mut self) -> Option<Vec<Message>> {
        if self.primed {
            match self.changes.recv().await {
                Ok(()) => {}
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => return None,
            }
        }
        self.primed = true;
        Some(messages_in_snapshot(&self.state.lock(), &self.conversation_id))
    }

    /// Detach the listener. Equivalent to dropping the feed.
    pub fn cancel(self) {}
}
