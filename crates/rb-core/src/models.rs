//! # Domain Models
//!
//! A `Board` is the only persisted aggregate: it owns its `Thread`s, which own
//! their `Reply`s. Nothing below a board is ever stored on its own.
//! We use UUID v7 for time-ordered, globally unique identification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Text that replaces the content of a reply deleted by its author.
pub const TOMBSTONE: &str = "[deleted]";

/// A named board (e.g., /b/, /test/) and every thread posted to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// The board name from the URL, unique across the store
    pub name: String,
    #[serde(default)]
    pub threads: Vec<Thread>,
}

/// A top-level post within a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_on: DateTime<Utc>,
    /// The timestamp used for sorting threads by activity
    pub bumped_on: DateTime<Utc>,
    #[serde(default)]
    pub reported: bool,
    /// Argon2 PHC string produced by the `CredentialGuard`
    pub delete_password: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A post attached to exactly one thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub reported: bool,
    pub delete_password: String,
}

/// Outcome of a password-gated delete that found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    IncorrectPassword,
}

/// Ids come from clients as strings; anything that is not a UUID cannot
/// match a stored record.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threads: Vec::new(),
        }
    }

    pub fn thread(&self, id: &str) -> Option<&Thread> {
        let id = parse_id(id)?;
        self.threads.iter().find(|t| t.id == id)
    }

    pub fn thread_mut(&mut self, id: &str) -> Option<&mut Thread> {
        let id = parse_id(id)?;
        self.threads.iter_mut().find(|t| t.id == id)
    }

    /// Removes the thread and hands it back, or `None` if no thread has that id.
    pub fn remove_thread(&mut self, id: &str) -> Option<Thread> {
        let id = parse_id(id)?;
        let index = self.threads.iter().position(|t| t.id == id)?;
        Some(self.threads.remove(index))
    }
}

impl Thread {
    /// A fresh thread: not reported, no replies, `bumped_on == created_on`.
    pub fn new(text: impl Into<String>, delete_password: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password,
            replies: Vec::new(),
        }
    }

    pub fn reply(&self, id: &str) -> Option<&Reply> {
        let id = parse_id(id)?;
        self.replies.iter().find(|r| r.id == id)
    }

    pub fn reply_mut(&mut self, id: &str) -> Option<&mut Reply> {
        let id = parse_id(id)?;
        self.replies.iter_mut().find(|r| r.id == id)
    }

    /// Appends a reply and bumps the thread to the reply's creation time.
    pub fn push_reply(&mut self, reply: Reply) {
        self.bumped_on = reply.created_on;
        self.replies.push(reply);
    }
}

impl Reply {
    pub fn new(text: impl Into<String>, delete_password: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            created_on: now,
            reported: false,
            delete_password,
        }
    }

    pub fn redact(&mut self) {
        self.text = TOMBSTONE.to_string();
    }
}

/// Public shape of a reply inside any listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

/// One entry of a board listing: capped replies plus the true reply count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyView>,
    pub replycount: usize,
}

/// A single thread with every reply in storage order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyView>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

impl From<&Thread> for ThreadDetail {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: thread.replies.iter().map(ReplyView::from).collect(),
        }
    }
}
