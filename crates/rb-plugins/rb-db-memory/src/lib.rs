//! # rb-db-memory
//!
//! Process-local `BoardStore` for demos and development. Everything is lost
//! on restart.

use async_trait::async_trait;
use dashmap::DashMap;
use rb_core::models::Board;
use rb_core::traits::BoardStore;

#[derive(Default)]
pub struct MemoryBoardStore {
    boards: DashMap<String, Board>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn find_board(&self, name: &str) -> anyhow::Result<Option<Board>> {
        Ok(self.boards.get(name).map(|b| b.value().clone()))
    }

    async fn get_or_create_board(&self, name: &str) -> anyhow::Result<Board> {
        Ok(self
            .boards
            .entry(name.to_string())
            .or_insert_with(|| Board::new(name))
            .value()
            .clone())
    }

    async fn save_board(&self, board: &Board) -> anyhow::Result<()> {
        self.boards.insert(board.name.clone(), board.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rb_core::models::Thread;

    #[tokio::test]
    async fn create_save_find() {
        let store = MemoryBoardStore::new();
        assert!(store.find_board("b").await.unwrap().is_none());

        let mut board = store.get_or_create_board("b").await.unwrap();
        board.threads.push(Thread::new("op", "hash".into(), Utc::now()));
        store.save_board(&board).await.unwrap();

        assert_eq!(store.find_board("b").await.unwrap(), Some(board.clone()));
        assert_eq!(store.get_or_create_board("b").await.unwrap(), board);
    }
}
