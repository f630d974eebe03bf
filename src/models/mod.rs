//! Data models for profiles and message threads.
//!
//! - [`UserProfile`] / [`Skill`] - directory documents describing what a user
//!   offers and wants to learn
//! - [`Conversation`] / [`Message`] - persisted two-party message threads
//!
//! All models use serde with camelCase field names so files on disk keep the
//! backend's original document shape.

pub mod message;
pub mod profile;

pub use message::{Conversation, Message, MessageType};
pub use profile::{Skill, SkillCategory, SkillLevel, UserProfile};
