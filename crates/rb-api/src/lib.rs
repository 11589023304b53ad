//! # rb-api
//!
//! The web routing and orchestration layer for reply-board.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Configures the JSON API and the sample pages.
///
/// # Developer Note
/// Unknown paths are not handled here; the binary installs
/// `handlers::not_found` as the app's default service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/threads/{board}")
            .route(web::get().to(handlers::list_threads))
            .route(web::post().to(handlers::create_thread))
            .route(web::put().to(handlers::report_thread))
            .route(web::delete().to(handlers::delete_thread)),
    )
    .service(
        web::resource("/api/replies/{board}")
            .route(web::get().to(handlers::view_thread))
            .route(web::post().to(handlers::create_reply))
            .route(web::put().to(handlers::report_reply))
            .route(web::delete().to(handlers::delete_reply)),
    )
    // The "Board Page" (e.g., /b/test/)
    .service(web::resource(["/b/{board}", "/b/{board}/"]).route(web::get().to(handlers::board_page)))
    // The "Thread Page" (e.g., /b/test/0190...)
    .service(web::resource("/b/{board}/{thread_id}").route(web::get().to(handlers::thread_page)))
    .service(web::resource("/").route(web::get().to(handlers::index)));
}
