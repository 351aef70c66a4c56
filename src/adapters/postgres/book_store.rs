use crate::domain::{Book, BookDraft, BookId};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        id: BookId::from_i64(row.get("id")),
        name: row.get("name"),
        summary: row.get("summary"),
        rating: row.get("rating"),
    }
}

/// BookStoreのPostgreSQL実装
///
/// `book_record`テーブルに対して単一行のSQLを発行する。
/// IDはBIGSERIALで採番される。
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    /// PostgreSQLコネクションプールから新しいBookStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    /// 全書籍をID順に取得
    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, summary, rating
            FROM book_record
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, summary, rating
            FROM book_record
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    /// 書籍をINSERTし、BIGSERIALで採番されたIDを返す
    async fn save(&self, draft: BookDraft) -> Result<Book> {
        let row = sqlx::query(
            r#"
            INSERT INTO book_record (name, summary, rating)
            VALUES ($1, $2, $3)
            RETURNING id, name, summary, rating
            "#,
        )
        .bind(draft.name())
        .bind(draft.summary())
        .bind(draft.rating())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_book(&row))
    }

    /// 書籍をUPDATE
    ///
    /// 削除済みの行は復活させない（該当行がなければNone）。
    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            UPDATE book_record
            SET name = $2, summary = $3, rating = $4
            WHERE id = $1
            RETURNING id, name, summary, rating
            "#,
        )
        .bind(id.value())
        .bind(draft.name())
        .bind(draft.summary())
        .bind(draft.rating())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        sqlx::query("DELETE FROM book_record WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
