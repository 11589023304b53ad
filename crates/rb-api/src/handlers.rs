//! # rb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and `BoardService`.

use actix_web::{web, Either, HttpResponse};
use askama::Template;
use rb_core::error::AppError;
use rb_core::models::DeleteOutcome;
use rb_core::service::BoardService;
use rb_ui::{BoardTemplate, IndexTemplate, ThreadTemplate};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub service: BoardService,
}

impl AppState {
    pub fn new(service: BoardService) -> Self {
        Self { service }
    }
}

type ApiResult = Result<HttpResponse, ApiError>;

/// Browsers post forms, scripts post JSON; both are accepted.
type Body<T> = Result<Either<web::Json<T>, web::Form<T>>, actix_web::Error>;

fn body<T: DeserializeOwned>(raw: Body<T>) -> Result<T, ApiError> {
    match raw.map_err(ApiError::malformed)? {
        Either::Left(json) => Ok(json.into_inner()),
        Either::Right(form) => Ok(form.into_inner()),
    }
}

fn success() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body("success")
}

fn deleted(outcome: DeleteOutcome) -> HttpResponse {
    match outcome {
        DeleteOutcome::Deleted => success(),
        DeleteOutcome::IncorrectPassword => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body("incorrect password"),
    }
}

#[derive(Debug, Deserialize)]
pub struct NewThread {
    pub text: String,
    pub delete_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportThread {
    pub report_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteThread {
    pub thread_id: String,
    pub delete_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    pub thread_id: String,
}

#[derive(Debug, Deserialize)]
pub struct NewReply {
    pub thread_id: String,
    pub text: String,
    pub delete_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplyTarget {
    pub thread_id: String,
    pub reply_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReply {
    pub thread_id: String,
    pub reply_id: String,
    pub delete_password: String,
}

/// GET /api/threads/{board}
pub async fn list_threads(data: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let threads = data.service.list_board(&path).await?;
    Ok(HttpResponse::Ok().json(threads))
}

/// POST /api/threads/{board}
pub async fn create_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<NewThread>,
) -> ApiResult {
    let form = body(form)?;
    let thread = data
        .service
        .create_thread(&path, &form.text, &form.delete_password)
        .await?;
    Ok(HttpResponse::Ok().json(thread))
}

/// PUT /api/threads/{board}
pub async fn report_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<ReportThread>,
) -> ApiResult {
    let form = body(form)?;
    data.service.report_thread(&path, &form.report_id).await?;
    Ok(success())
}

/// DELETE /api/threads/{board}
pub async fn delete_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<DeleteThread>,
) -> ApiResult {
    let form = body(form)?;
    let outcome = data
        .service
        .delete_thread(&path, &form.thread_id, &form.delete_password)
        .await?;
    Ok(deleted(outcome))
}

/// GET /api/replies/{board}?thread_id=
pub async fn view_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: Result<web::Query<ThreadQuery>, actix_web::Error>,
) -> ApiResult {
    let query = query.map_err(ApiError::malformed)?;
    let thread = data.service.list_thread(&path, &query.thread_id).await?;
    Ok(HttpResponse::Ok().json(thread))
}

/// POST /api/replies/{board}
pub async fn create_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<NewReply>,
) -> ApiResult {
    let form = body(form)?;
    let thread = data
        .service
        .create_reply(&path, &form.thread_id, &form.text, &form.delete_password)
        .await?;
    Ok(HttpResponse::Ok().json(thread))
}

/// PUT /api/replies/{board}
pub async fn report_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<ReplyTarget>,
) -> ApiResult {
    let form = body(form)?;
    data.service
        .report_reply(&path, &form.thread_id, &form.reply_id)
        .await?;
    Ok(success())
}

/// DELETE /api/replies/{board}
pub async fn delete_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: Body<DeleteReply>,
) -> ApiResult {
    let form = body(form)?;
    let outcome = data
        .service
        .delete_reply(&path, &form.thread_id, &form.reply_id, &form.delete_password)
        .await?;
    Ok(deleted(outcome))
}

/// Renders the home page at "/".
pub async fn index() -> ApiResult {
    let html = IndexTemplate { title: "reply-board" }.render()?;
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Renders the Board page (e.g., /b/test/)
pub async fn board_page(data: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let board = path.into_inner();
    let threads = data.service.list_board(&board).await?;

    let html = BoardTemplate {
        board: &board,
        threads: &threads,
        title: &format!("/{board}/"),
    }
    .render()?;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Renders a specific Thread (e.g., /b/test/<uuid>)
pub async fn thread_page(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ApiResult {
    let (board, thread_id) = path.into_inner();

    let thread = match data.service.list_thread(&board, &thread_id).await {
        Ok(thread) => thread,
        Err(AppError::NotFound(_)) => return Ok(not_found_response()),
        Err(e) => return Err(e.into()),
    };

    let html = ThreadTemplate {
        board: &board,
        thread: &thread,
        title: &format!("/{board}/ - {}", thread.id),
    }
    .render()?;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Fallback for every unknown route.
pub async fn not_found() -> HttpResponse {
    not_found_response()
}

fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound().content_type("text/plain").body("Not Found")
}
