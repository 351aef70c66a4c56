use crate::domain::ValidationError;
use thiserror::Error;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 入力値が不正（永続化前に検出）
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
