//! # rb-db-sqlite Implementation
//!
//! Stores each board aggregate as a single JSON document keyed by name.
//! Threads and replies live inside that document; there are no child tables.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use rb_core::models::Board;
use rb_core::traits::BoardStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS boards (
    name       TEXT PRIMARY KEY NOT NULL,
    document   TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

pub struct SqliteBoardStore {
    pool: SqlitePool,
}

impl SqliteBoardStore {
    /// Opens (creating if missing) the database at `url` and ensures the
    /// schema exists. `sqlite::memory:` gives a private in-process store.
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to :memory: is its own database, so pin the pool
        // to a single connection that is never recycled.
        let in_memory = url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .idle_timeout(if in_memory { None } else { Some(std::time::Duration::from_secs(600)) })
            .max_lifetime(if in_memory { None } else { Some(std::time::Duration::from_secs(1800)) })
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open {url}"))?;

        sqlx::query(SCHEMA).execute(&pool).await?;
        log::info!("sqlite board store ready at {url}");

        Ok(Self { pool })
    }

    async fn upsert(&self, board: &Board, overwrite: bool) -> anyhow::Result<()> {
        let sql = if overwrite {
            "INSERT INTO boards (name, document, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(name) DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at"
        } else {
            "INSERT INTO boards (name, document, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(name) DO NOTHING"
        };

        sqlx::query(sql)
            .bind(&board.name)
            .bind(serde_json::to_string(board)?)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BoardStore for SqliteBoardStore {
    /// Retrieves a board by name and decodes its document.
    async fn find_board(&self, name: &str) -> anyhow::Result<Option<Board>> {
        let row = sqlx::query("SELECT document FROM boards WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                let board = serde_json::from_str(&document)
                    .with_context(|| format!("board {name} has a corrupt document"))?;
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    /// Insert-if-absent followed by a read, so two racing creators end up
    /// with the same board.
    async fn get_or_create_board(&self, name: &str) -> anyhow::Result<Board> {
        self.upsert(&Board::new(name), false).await?;
        self.find_board(name)
            .await?
            .with_context(|| format!("board {name} vanished after insert"))
    }

    /// One statement per save: the whole document is replaced atomically.
    async fn save_board(&self, board: &Board) -> anyhow::Result<()> {
        self.upsert(board, true).await
    }
}
