//! Conversation store: threads, messages, and live snapshot feeds.
//!
//! [`MessageBoard`] models the external document store in-process. Operations
//! mirror the backend's semantics one-to-one, including its unread-counter
//! quirk (see [`MessageBoard::send_message`]). Subscriptions deliver full
//! updated collections on every change, not deltas.

pub mod board;
pub mod feed;
pub mod persistence;

pub use board::{BoardSnapshot, MessageBoard};
pub use feed::{ConversationFeed, MessageFeed};
pub use persistence::{default_board_path, load_board, save_board};
