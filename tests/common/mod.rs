#![allow(dead_code)]

use async_trait::async_trait;
use book_record_api::adapters::memory::InMemoryBookStore;
use book_record_api::domain::{Book, BookDraft, BookId};
use book_record_api::ports::book_store::{BookStore, Result};
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};

/// テスト用データベースプールを作成し、マイグレーションを実行
///
/// DATABASE_URL環境変数が未設定の場合はNoneを返し、
/// 呼び出し側のテストはデータベースを使わずに終了します。
/// 設定されている場合は本番と同じマイグレーションファイルを適用します。
pub async fn create_test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set; skipping PostgreSQL test");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// 呼び出し回数を記録するBookStore
///
/// インメモリ実装に委譲しつつ、書き込み（saveとupdate）と
/// delete_by_idの呼び出しを数えます。
/// 「検証失敗時にストアを呼ばない」ことの確認に使用します。
pub struct RecordingBookStore {
    inner: InMemoryBookStore,
    write_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl RecordingBookStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryBookStore::new(),
            write_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// 呼び出し回数に含めずに書籍を登録
    pub async fn seed(&self, name: &str, summary: &str, rating: i32) -> Book {
        let draft =
            BookDraft::parse(Some(name.to_string()), Some(summary.to_string()), Some(rating))
                .unwrap();
        self.inner.save(draft).await.unwrap()
    }
}

#[async_trait]
impl BookStore for RecordingBookStore {
    async fn find_all(&self) -> Result<Vec<Book>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, draft: BookDraft) -> Result<Book> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(draft).await
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, draft).await
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }
}

/// 常に失敗するBookStore
pub struct FailingBookStore;

#[async_trait]
impl BookStore for FailingBookStore {
    async fn find_all(&self) -> Result<Vec<Book>> {
        Err("connection refused".into())
    }

    async fn find_by_id(&self, _id: BookId) -> Result<Option<Book>> {
        Err("connection refused".into())
    }

    async fn save(&self, _draft: BookDraft) -> Result<Book> {
        Err("connection refused".into())
    }

    async fn update(&self, _id: BookId, _draft: BookDraft) -> Result<Option<Book>> {
        Err("connection refused".into())
    }

    async fn delete_by_id(&self, _id: BookId) -> Result<()> {
        Err("connection refused".into())
    }
}

/// 検索直後に同じ行を削除するBookStore
///
/// 検索と上書きの間に別リクエストのDELETEが割り込んだ状況を再現します。
pub struct DeletedAfterLookupBookStore {
    inner: InMemoryBookStore,
}

impl DeletedAfterLookupBookStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryBookStore::new(),
        }
    }

    pub async fn seed(&self, name: &str, summary: &str, rating: i32) -> Book {
        let draft =
            BookDraft::parse(Some(name.to_string()), Some(summary.to_string()), Some(rating))
                .unwrap();
        self.inner.save(draft).await.unwrap()
    }
}

#[async_trait]
impl BookStore for DeletedAfterLookupBookStore {
    async fn find_all(&self) -> Result<Vec<Book>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let found = self.inner.find_by_id(id).await?;
        self.inner.delete_by_id(id).await?;
        Ok(found)
    }

    async fn save(&self, draft: BookDraft) -> Result<Book> {
        self.inner.save(draft).await
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>> {
        self.inner.update(id, draft).await
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        self.inner.delete_by_id(id).await
    }
}
