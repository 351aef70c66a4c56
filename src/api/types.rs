use serde::{Deserialize, Serialize};

use crate::domain::{
    Book, BookId,
    commands::{CreateBook, UpdateBook},
};

/// 書籍リクエスト（POST /book と PUT /book）
///
/// 必須チェックはドメイン側で行うため、すべての項目を任意で受け取る。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub rating: Option<i32>,
}

impl BookRequest {
    /// 新規登録コマンドに変換（`id`は無視）
    pub fn to_create_command(&self) -> CreateBook {
        CreateBook {
            name: self.name.clone(),
            summary: self.summary.clone(),
            rating: self.rating,
        }
    }

    pub fn to_update_command(&self) -> UpdateBook {
        UpdateBook {
            id: self.id.map(BookId::from_i64),
            name: self.name.clone(),
            summary: self.summary.clone(),
            rating: self.rating,
        }
    }
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub rating: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
            summary: book.summary,
            rating: book.rating,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
