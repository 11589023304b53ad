//! # BoardService
//!
//! Every operation loads the board aggregate, works on an owned copy and
//! writes the whole board back. There is no locking: two requests racing on
//! the same board resolve as last-write-wins.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, Entity, Result};
use crate::models::{Board, DeleteOutcome, Reply, Thread, ThreadDetail, ThreadSummary};
use crate::policy;
use crate::traits::{BoardStore, CredentialGuard};

pub struct BoardService {
    store: Arc<dyn BoardStore>,
    guard: Arc<dyn CredentialGuard>,
}

impl BoardService {
    pub fn new(store: Arc<dyn BoardStore>, guard: Arc<dyn CredentialGuard>) -> Self {
        Self { store, guard }
    }

    /// Board front page. An unknown board is an empty listing.
    pub async fn list_board(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        Ok(self
            .store
            .find_board(board)
            .await?
            .map(|b| policy::summarize_board(&b))
            .unwrap_or_default())
    }

    pub async fn list_thread(&self, board: &str, thread_id: &str) -> Result<ThreadDetail> {
        let board = self.load(board).await?;
        let thread = board
            .thread(thread_id)
            .ok_or(AppError::NotFound(Entity::Thread))?;
        Ok(ThreadDetail::from(thread))
    }

    /// Returns the stored thread as-is, password hash included.
    pub async fn create_thread(&self, board: &str, text: &str, password: &str) -> Result<Thread> {
        let mut board = self.store.get_or_create_board(board).await?;
        let hash = self.guard.hash(password).await?;

        let thread = Thread::new(text, hash, Utc::now());
        board.threads.push(thread.clone());
        self.store.save_board(&board).await?;

        log::info!("thread {} created on /{}/", thread.id, board.name);
        Ok(thread)
    }

    /// Idempotent: reporting twice is two successes.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        let mut board = self.load(board).await?;
        thread_mut(&mut board, thread_id)?.reported = true;
        self.store.save_board(&board).await?;

        log::info!("thread {} reported on /{}/", thread_id, board.name);
        Ok(())
    }

    /// A wrong password leaves the board untouched and saves nothing.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let mut board = self.load(board).await?;
        let hash = thread_mut(&mut board, thread_id)?.delete_password.clone();

        if !self.guard.verify(password, &hash).await? {
            log::warn!("rejected delete of thread {} on /{}/", thread_id, board.name);
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        board
            .remove_thread(thread_id)
            .ok_or(AppError::NotFound(Entity::Thread))?;
        self.store.save_board(&board).await?;

        log::info!("thread {} deleted from /{}/", thread_id, board.name);
        Ok(DeleteOutcome::Deleted)
    }

    /// Appends the reply, bumps the thread, and returns the whole updated
    /// thread including every reply's hash.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        password: &str,
    ) -> Result<Thread> {
        let mut board = self.load(board).await?;
        board
            .thread(thread_id)
            .ok_or(AppError::NotFound(Entity::Thread))?;
        let hash = self.guard.hash(password).await?;

        let thread = thread_mut(&mut board, thread_id)?;
        let reply = Reply::new(text, hash, Utc::now());
        let reply_id = reply.id;
        thread.push_reply(reply);
        let thread = thread.clone();
        self.store.save_board(&board).await?;

        log::info!("reply {} added to thread {} on /{}/", reply_id, thread.id, board.name);
        Ok(thread)
    }

    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        let mut board = self.load(board).await?;
        reply_mut(&mut board, thread_id, reply_id)?.reported = true;
        self.store.save_board(&board).await?;

        log::info!("reply {} reported on /{}/", reply_id, board.name);
        Ok(())
    }

    /// Redacts rather than removes: the reply keeps its slot and the
    /// thread's reply count does not change.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let mut board = self.load(board).await?;
        let hash = reply_mut(&mut board, thread_id, reply_id)?.delete_password.clone();

        if !self.guard.verify(password, &hash).await? {
            log::warn!("rejected delete of reply {} on /{}/", reply_id, board.name);
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        reply_mut(&mut board, thread_id, reply_id)?.redact();
        self.store.save_board(&board).await?;

        log::info!("reply {} redacted on /{}/", reply_id, board.name);
        Ok(DeleteOutcome::Deleted)
    }

    async fn load(&self, name: &str) -> Result<Board> {
        self.store
            .find_board(name)
            .await?
            .ok_or(AppError::NotFound(Entity::Board))
    }
}

fn thread_mut<'a>(board: &'a mut Board, thread_id: &str) -> Result<&'a mut Thread> {
    board
        .thread_mut(thread_id)
        .ok_or(AppError::NotFound(Entity::Thread))
}

fn reply_mut<'a>(board: &'a mut Board, thread_id: &str, reply_id: &str) -> Result<&'a mut Reply> {
    thread_mut(board, thread_id)?
        .reply_mut(reply_id)
        .ok_or(AppError::NotFound(Entity::Reply))
}
