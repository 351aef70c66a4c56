use crate::domain::{Book, BookDraft, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// 書籍テーブルに対する単一行の操作のみを提供する。
/// トランザクションや採番の扱いは実装側に委ねる。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 全書籍を取得する（順序はストアの定義に従う）
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 新しい書籍を保存する
    ///
    /// IDはストアが採番し、保存後の書籍を返す。
    async fn save(&self, draft: BookDraft) -> Result<Book>;

    /// 既存の書籍の可変項目を上書きする
    ///
    /// 行が存在しない場合は挿入せずに`None`を返す。
    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>>;

    /// IDで書籍を削除する
    async fn delete_by_id(&self, id: BookId) -> Result<()>;
}
