use crate::application::book::{
    ServiceDependencies, create_book as execute_create_book, delete_book as execute_delete_book,
    get_book as execute_get_book, list_books as execute_list_books,
    update_book as execute_update_book,
};
use crate::domain::BookId;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookRequest, BookResponse},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// GET /book - 全書籍を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /book/:id - IDで書籍を取得
///
/// 見つからない場合は本文なしの404を返す。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_get_book(&state.service_deps, BookId::from_i64(book_id)).await?;
    Ok(Json(BookResponse::from(book)))
}

/// POST /book - 書籍を登録
///
/// 作成された書籍を200で返す。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Json(req) = payload?;

    let book = execute_create_book(&state.service_deps, req.to_create_command()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// PUT /book - 書籍を上書き更新
///
/// ボディの`id`で既存の書籍を検索する。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Json(req) = payload?;

    let book = execute_update_book(&state.service_deps, req.to_update_command()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// DELETE /book/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    execute_delete_book(&state.service_deps, BookId::from_i64(book_id)).await?;
    Ok(StatusCode::OK)
}
