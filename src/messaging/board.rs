use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::feed::{ConversationFeed, MessageFeed};
use crate::error::BackendError;
use crate::models::{Conversation, Message, MessageType};

/// Capacity of the change-notification channel. Feeds collapse lagged
/// notifications into the latest snapshot, so overflow only coalesces updates.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Full persistable state of the board: every conversation and every message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

/// In-process conversation store with live snapshot subscriptions.
///
/// All operations are async to mirror the external store's suspension points,
/// but each runs to completion under a single lock; there is no client-side
/// transaction discipline beyond that. Two boards opened over the same
/// persisted file can still race `ensure_conversation` (last write wins).
pub struct MessageBoard {
    state: Arc<Mutex<BoardSnapshot>>,
    changes: broadcast::Sender<()>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::from_snapshot(BoardSnapshot::default())
    }

    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { state: Arc::new(Mutex::new(snapshot)), changes }
    }

    /// Clone the full board state, for persistence.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.lock().clone()
    }

    /// Return the id of the conversation between the two users, creating the
    /// thread with zeroed unread counters if it does not exist yet.
    ///
    /// The pair match is order-independent, so repeated calls with either
    /// argument order return the same id.
    pub async fn ensure_conversation(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<String, BackendError> {
        let mut state = self.state.lock();

        // Threads containing user_a, narrowed in memory to one that also
        // contains user_b.
        if let Some(existing) = state
            .conversations
            .iter()
            .filter(|c| c.has_participant(user_a))
            .find(|c| c.has_participant(user_b))
        {
            return Ok(existing.id.clone());
        }

        let now = Utc::now();
        let conversation = Conversation {
            id: Uuid::new_v4().to_string(),
            participants: vec![user_a.to_string(), user_b.to_string()],
            last_message: None,
            unread_count: HashMap::from([(user_a.to_string(), 0), (user_b.to_string(), 0)]),
            created_at: now,
            updated_at: now,
        };
        let id = conversation.id.clone();
        tracing::debug!(conversation = %id, "created conversation");
        state.conversations.push(conversation);
        drop(state);

        self.notify();
        Ok(id)
    }

    /// Append a message to the thread and refresh the conversation's cached
    /// last message.
    ///
    /// The timestamp is store-assigned and the message starts unread. The
    /// unread-map entry keyed by the *receiver* is zeroed here; the counter is
    /// never incremented anywhere. That reproduces the legacy store update
    /// verbatim rather than what an unread counter would normally do.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<Message, BackendError> {
        let message = Message {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            read: false,
            kind: MessageType::Text,
        };

        let mut state = self.state.lock();
        {
            let conversation = state
                .conversations
                .iter_mut()
                .find(|c| c.id == conversation_id)
                .ok_or_else(|| BackendError::ConversationNotFound(conversation_id.to_string()))?;
            conversation.last_message = Some(message.clone());
            conversation.updated_at = message.timestamp;
            conversation.unread_count.insert(receiver_id.to_string(), 0);
        }
        state.messages.push(message.clone());
        drop(state);

        self.notify();
        Ok(message)
    }

    /// Flip the named messages to read and zero the user's own unread entry.
    pub async fn mark_read(
        &self,
        conversation_id: &str,
        message_ids: &[String],
        user_id: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.state.lock();

        for message in state.messages.iter_mut() {
            if message.conversation_id == conversation_id && message_ids.contains(&message.id) {
                message.read = true;
            }
        }

        let conversation = state
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| BackendError::ConversationNotFound(conversation_id.to_string()))?;
        conversation.unread_count.insert(user_id.to_string(), 0);
        drop(state);

        self.notify();
        Ok(())
    }

    /// Conversations the user participates in, most recently updated first.
    pub async fn conversations_for(&self, user_id: &str) -> Vec<Conversation> {
        conversations_in_snapshot(&self.state.lock(), user_id)
    }

    /// Messages of one thread, oldest first.
    pub async fn messages_in(&self, conversation_id: &str) -> Vec<Message> {
        messages_in_snapshot(&self.state.lock(), conversation_id)
    }

    /// Live feed of the user's conversation list. The first `next()` yields
    /// the current snapshot; each later one waits for a change.
    pub fn subscribe_conversations(&self, user_id: &str) -> ConversationFeed {
        ConversationFeed::new(
            Arc::clone(&self.state),
            self.changes.subscribe(),
            user_id.to_string(),
        )
    }

    /// Live feed of one thread's messages, oldest first.
    pub fn subscribe_messages(&self, conversation_id: &str) -> MessageFeed {
        MessageFeed::new(
            Arc::clone(&self.state),
            self.changes.subscribe(),
            conversation_id.to_string(),
        )
    }

    /// Number of currently attached feeds.
    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }

    fn notify(&self) {
        // No receivers is fine; feeds attach and detach freely.
        let _ = self.changes.send(());
    }
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn conversations_in_snapshot(
    snapshot: &BoardSnapshot,
    user_id: &str,
) -> Vec<Conversation> {
    let mut conversations: Vec<Conversation> = snapshot
        .conversations
        .iter()
        .filter(|c| c.has_participant(user_id))
        .cloned()
        .collect();
    conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    conversations
}

pub(crate) fn messages_in_snapshot(snapshot: &BoardSnapshot, conversation_id: &str) -> Vec<Message> {
    let mut messages: Vec<Message> = snapshot
        .messages
        .iter()
        .filter(|m| m.conversation_id == conversation_id)
        .cloned()
        .collect();
    messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_conversation_is_idempotent() {
        let board = MessageBoard::new();
        let first = board.ensure_conversation("alice", "bob").await.unwrap();
        let second = board.ensure_conversation("alice", "bob").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(board.snapshot().conversations.len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_conversation_pair_is_unordered() {
        let board = MessageBoard::new();
        let forward = board.ensure_conversation("alice", "bob").await.unwrap();
        let reverse = board.ensure_conversation("bob", "alice").await.unwrap();
        assert_eq!(forward, reverse);
    }

    #[tokio::test]
    async fn test_new_conversation_has_zeroed_counters() {
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();

        let snapshot = board.snapshot();
        let conversation = snapshot.conversations.iter().find(|c| c.id == id).unwrap();
        assert_eq!(conversation.unread_count.get("alice"), Some(&0));
        assert_eq!(conversation.unread_count.get("bob"), Some(&0));
    }

    #[tokio::test]
    async fn test_distinct_pairs_get_distinct_threads() {
        let board = MessageBoard::new();
        let ab = board.ensure_conversation("alice", "bob").await.unwrap();
        let ac = board.ensure_conversation("alice", "carol").await.unwrap();
        assert_ne!(ab, ac);
    }

    #[tokio::test]
    async fn test_send_message_appends_and_caches_last() {
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();

        let sent = board.send_message(&id, "alice", "bob", "hi bob").await.unwrap();
        assert!(!sent.read);
        assert_eq!(sent.kind, MessageType::Text);

        let messages = board.messages_in(&id).await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi bob");

        let conversations = board.conversations_for("bob").await;
        assert_eq!(conversations[0].last_message.as_ref().unwrap().id, sent.id);
    }

    #[tokio::test]
    async fn test_send_zeroes_receiver_counter_entry() {
        // Legacy behavior under test: the receiver's entry is written to 0 on
        // send; nothing ever increments either entry.
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();
        board.send_message(&id, "alice", "bob", "hi").await.unwrap();

        let snapshot = board.snapshot();
        let conversation = &snapshot.conversations[0];
        assert_eq!(conversation.unread_count.get("bob"), Some(&0));
        assert_eq!(conversation.unread_count.get("alice"), Some(&0));
    }

    #[tokio::test]
    async fn test_send_to_unknown_conversation_fails() {
        let board = MessageBoard::new();
        let err = board.send_message("nope", "alice", "bob", "hi").await.unwrap_err();
        assert!(matches!(err, BackendError::ConversationNotFound(_)));
    }

    #[tokio::test]
    async fn test_messages_ordered_oldest_first() {
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();
        board.send_message(&id, "alice", "bob", "first").await.unwrap();
        board.send_message(&id, "bob", "alice", "second").await.unwrap();
        board.send_message(&id, "alice", "bob", "third").await.unwrap();

        let contents: Vec<_> =
            board.messages_in(&id).await.into_iter().map(|m| m.content).collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_conversations_ordered_newest_first() {
        let board = MessageBoard::new();
        let ab = board.ensure_conversation("alice", "bob").await.unwrap();
        let ac = board.ensure_conversation("alice", "carol").await.unwrap();

        // Touch the older thread; it should move to the front.
        board.send_message(&ab, "alice", "bob", "bump").await.unwrap();

        let ids: Vec<_> =
            board.conversations_for("alice").await.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, [ab, ac]);
    }

    #[tokio::test]
    async fn test_conversations_for_filters_by_participant() {
        let board = MessageBoard::new();
        board.ensure_conversation("alice", "bob").await.unwrap();
        board.ensure_conversation("carol", "dave").await.unwrap();

        assert_eq!(board.conversations_for("alice").await.len(), 1);
        assert_eq!(board.conversations_for("eve").await.len(), 0);
    }

    #[tokio::test]
    async fn test_mark_read_flips_messages_and_own_counter() {
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();
        let sent = board.send_message(&id, "alice", "bob", "hi").await.unwrap();

        board.mark_read(&id, &[sent.id.clone()], "bob").await.unwrap();

        let messages = board.messages_in(&id).await;
        assert!(messages[0].read);
        let snapshot = board.snapshot();
        assert_eq!(snapshot.conversations[0].unread_count.get("bob"), Some(&0));
    }

    #[tokio::test]
    async fn test_mark_read_ignores_other_conversations() {
        let board = MessageBoard::new();
        let ab = board.ensure_conversation("alice", "bob").await.unwrap();
        let ac = board.ensure_conversation("alice", "carol").await.unwrap();
        let in_ab = board.send_message(&ab, "alice", "bob", "hi").await.unwrap();

        // Same message id passed against the wrong thread does nothing.
        board.mark_read(&ac, &[in_ab.id.clone()], "carol").await.unwrap();
        assert!(!board.messages_in(&ab).await[0].read);
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let board = MessageBoard::new();
        let id = board.ensure_conversation("alice", "bob").await.unwrap();
        board.send_message(&id, "alice", "bob", "hi").await.unwrap();

        let restored = MessageBoard::from_snapshot(board.snapshot());
        assert_eq!(restored.snapshot(), board.snapshot());
        assert_eq!(restored.ensure_conversation("bob", "alice").await.unwrap(), id);
    }
}
