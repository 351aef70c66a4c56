use crate::application::book::BookApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーとリクエストボディの解析失敗を
/// HTTPレスポンスへマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(BookApplicationError),
    InvalidBody(JsonRejection),
}

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 400 Bad Request - 入力値の検証エラー
            ApiError::Application(BookApplicationError::Validation(err)) => {
                tracing::debug!(error = %err, "rejected invalid book");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(err.to_string())),
                )
                    .into_response()
            }
            // 不正なJSON・型不一致・Content-Type不備もすべて400として扱う
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(rejection.body_text())),
                )
                    .into_response()
            }

            // 404 Not Found - 本文なし
            ApiError::Application(BookApplicationError::BookNotFound) => {
                StatusCode::NOT_FOUND.into_response()
            }

            // 500 Internal Server Error - 詳細はログのみに記録する
            ApiError::Application(BookApplicationError::BookStoreError(e)) => {
                tracing::error!("Book store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("An unexpected error occurred")),
                )
                    .into_response()
            }
        }
    }
}
