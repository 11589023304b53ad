//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;
use crate::models::Board;

/// Document persistence contract. A board is read and written as one
/// aggregate; there is no partial update of threads or replies.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Fetches a board by name, `None` if it was never created.
    async fn find_board(&self, name: &str) -> anyhow::Result<Option<Board>>;

    /// Fetches a board by name, creating an empty one first if needed.
    async fn get_or_create_board(&self, name: &str) -> anyhow::Result<Board>;

    /// Replaces the stored aggregate. Last write wins.
    async fn save_board(&self, board: &Board) -> anyhow::Result<()>;
}

/// One-way password hashing for delete passwords.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CredentialGuard: Send + Sync {
    /// Hashes a password; the empty string is a valid input.
    async fn hash(&self, password: &str) -> anyhow::Result<String>;

    /// `Ok(false)` means wrong password. A hash the primitive cannot read is
    /// an `Err`, not a mismatch.
    async fn verify(&self, password: &str, hash: &str) -> anyhow::Result<bool>;
}
