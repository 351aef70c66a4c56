use super::{BookDraft, BookId, ValidationError, Violation};

/// コマンド：書籍を登録する
///
/// クライアントから`id`が送られてきても無視する（IDはストアが採番する）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBook {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub rating: Option<i32>,
}

impl CreateBook {
    pub fn validate(self) -> Result<BookDraft, ValidationError> {
        BookDraft::parse(self.name, self.summary, self.rating)
    }
}

/// コマンド：既存の書籍を上書き更新する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBook {
    pub id: Option<BookId>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateBook {
    /// 項目の検証に加え、検索キーとなる`id`の存在を確認する
    pub fn validate(self) -> Result<(BookId, BookDraft), ValidationError> {
        let draft = BookDraft::parse(self.name, self.summary, self.rating);

        match (self.id, draft) {
            (Some(id), Ok(draft)) => Ok((id, draft)),
            (Some(_), Err(err)) => Err(err),
            (None, Ok(_)) => Err(ValidationError::new(vec![Violation::Missing("id")])),
            (None, Err(err)) => Err(err.with(Violation::Missing("id"))),
        }
    }
}
