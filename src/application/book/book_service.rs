use crate::domain::{Book, BookId, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
///
/// ストアは起動時に一度だけ注入され、以降は読み取り専用で共有される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
}

/// IDで書籍を検索し、存在しなければBookNotFoundとする
async fn load_book(book_store: &Arc<dyn BookStore>, id: BookId) -> Result<Book> {
    book_store
        .find_by_id(id)
        .await
        .map_err(BookApplicationError::BookStoreError)?
        .ok_or_else(|| {
            tracing::debug!(book_id = %id, "book not found");
            BookApplicationError::BookNotFound
        })
}

/// 全書籍を取得する
///
/// 順序はストアの定義に従う。ページングは行わない。
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .find_all()
        .await
        .map_err(BookApplicationError::BookStoreError)
}

/// IDで書籍を取得する
pub async fn get_book(deps: &ServiceDependencies, id: BookId) -> Result<Book> {
    load_book(&deps.book_store, id).await
}

/// 書籍を登録する
///
/// 検証に失敗した場合はストアを呼び出さずにValidationを返す。
/// IDはストアが採番する。
pub async fn create_book(deps: &ServiceDependencies, cmd: CreateBook) -> Result<Book> {
    let draft = cmd.validate()?;

    let book = deps
        .book_store
        .save(draft)
        .await
        .map_err(BookApplicationError::BookStoreError)?;

    tracing::info!(book_id = %book.id, "book created");
    Ok(book)
}

/// 既存の書籍を上書き更新する
///
/// 処理フロー：
/// 1. 入力を検証（失敗時はストアを呼ばない）
/// 2. `id`で既存の書籍を検索（存在しなければBookNotFound）
/// 3. name, summary, ratingを上書き（IDは維持）
///
/// 検索と上書きの間に削除された場合もBookNotFoundとなる。
pub async fn update_book(deps: &ServiceDependencies, cmd: UpdateBook) -> Result<Book> {
    let (id, draft) = cmd.validate()?;

    let existing = load_book(&deps.book_store, id).await?;

    let book = deps
        .book_store
        .update(existing.id, draft)
        .await
        .map_err(BookApplicationError::BookStoreError)?
        .ok_or_else(|| {
            tracing::debug!(book_id = %existing.id, "book deleted before update");
            BookApplicationError::BookNotFound
        })?;

    tracing::info!(book_id = %book.id, "book updated");
    Ok(book)
}

/// 書籍を削除する
///
/// 存在しない場合はストアの削除を呼ばずにBookNotFoundを返す。
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    let existing = load_book(&deps.book_store, id).await?;

    deps.book_store
        .delete_by_id(existing.id)
        .await
        .map_err(BookApplicationError::BookStoreError)?;

    tracing::info!(book_id = %existing.id, "book deleted");
    Ok(())
}
