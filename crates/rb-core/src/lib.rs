//! reply-board/crates/rb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for reply-board.

pub mod models;
pub mod traits;
pub mod error;
pub mod policy;
pub mod service;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;
pub use service::BoardService;
