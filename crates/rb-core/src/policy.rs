//! # Listing Policy
//!
//! Read-only projections of a board. Nothing here touches the store, and
//! nothing here exposes `reported` or `delete_password`.

use std::cmp::Reverse;

use crate::models::{Board, ReplyView, Thread, ThreadSummary};

/// Threads shown on a board listing.
pub const MAX_THREADS: usize = 10;

/// Most recent replies shown under each listed thread.
pub const MAX_REPLIES: usize = 3;

/// The board front page: most recently bumped threads first, each with its
/// newest replies.
pub fn summarize_board(board: &Board) -> Vec<ThreadSummary> {
    let mut threads: Vec<&Thread> = board.threads.iter().collect();
    // stable: ties keep storage order
    threads.sort_by_key(|t| Reverse(t.bumped_on));

    log::debug!(
        "listing /{}/: {} of {} threads",
        board.name,
        threads.len().min(MAX_THREADS),
        threads.len()
    );

    threads
        .into_iter()
        .take(MAX_THREADS)
        .map(summarize_thread)
        .collect()
}

/// `replycount` is taken before the replies are capped.
pub fn summarize_thread(thread: &Thread) -> ThreadSummary {
    let mut replies: Vec<_> = thread.replies.iter().collect();
    replies.sort_by_key(|r| Reverse(r.created_on));

    ThreadSummary {
        id: thread.id,
        text: thread.text.clone(),
        created_on: thread.created_on,
        bumped_on: thread.bumped_on,
        replies: replies
            .into_iter()
            .take(MAX_REPLIES)
            .map(ReplyView::from)
            .collect(),
        replycount: thread.replies.len(),
    }
}
