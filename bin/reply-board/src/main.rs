//! # reply-board Binary
//!
//! The entry point that assembles the application based on compile-time features.

mod settings;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use rb_api::handlers::{self, AppState};
use rb_api::middleware::{cors_policy, security_headers, standard_middleware};
use rb_auth_simple::Argon2Guard;
use rb_core::service::BoardService;
use rb_core::traits::BoardStore;

use settings::Settings;

// Feature-gated imports: This is the "Compiled-to-Order" magic
#[cfg(feature = "db-sqlite")]
use rb_db_sqlite::SqliteBoardStore;

#[cfg(all(feature = "db-memory", not(feature = "db-sqlite")))]
use rb_db_memory::MemoryBoardStore;

#[cfg(not(any(feature = "db-sqlite", feature = "db-memory")))]
compile_error!("enable one store backend: `db-sqlite` or `db-memory`");

#[cfg(feature = "db-sqlite")]
async fn open_store(settings: &Settings) -> anyhow::Result<Arc<dyn BoardStore>> {
    let store = SqliteBoardStore::new(&settings.database.url)
        .await
        .context("Failed to init SQLite")?;
    Ok(Arc::new(store))
}

#[cfg(all(feature = "db-memory", not(feature = "db-sqlite")))]
async fn open_store(_settings: &Settings) -> anyhow::Result<Arc<dyn BoardStore>> {
    log::warn!("using the in-memory store; boards are lost on restart");
    Ok(Arc::new(MemoryBoardStore::new()))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::load().context("invalid configuration")?;

    // 1. Initialize Database Implementation
    let store = open_store(&settings).await?;

    // 2. Initialize Credential Guard
    let guard = Argon2Guard::from_costs(
        settings.argon2.memory_kib,
        settings.argon2.iterations,
        settings.argon2.parallelism,
    )?;

    // 3. Wrap in AppState (Using dynamic dispatch for maximum flexibility)
    let state = web::Data::new(AppState::new(BoardService::new(store, Arc::new(guard))));

    let bind = (settings.server.host.clone(), settings.server.port);
    log::info!("reply-board starting on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(security_headers())
            .wrap(cors_policy())
            .wrap(standard_middleware())
            .configure(rb_api::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
