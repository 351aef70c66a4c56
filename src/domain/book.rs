use super::errors::{ValidationError, Violation};
use super::value_objects::BookId;

/// 書籍 - 永続化済みのレコード
///
/// `id`はストアが採番し、以降変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub summary: String,
    pub rating: i32,
}

impl Book {
    /// 採番済みIDと検証済みの入力から書籍を組み立てる
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            name: draft.name,
            summary: draft.summary,
            rating: draft.rating,
        }
    }
}

/// 検証済みの書籍入力（IDを除く可変項目）
///
/// 不変条件：`name`と`summary`は空白のみではない。
/// `parse`以外では生成できないため、ストアに渡る値は常に検証済みとなる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    name: String,
    summary: String,
    rating: i32,
}

impl BookDraft {
    /// 生の入力を検証してBookDraftを作成する
    ///
    /// 違反はすべて収集し、一つでもあればValidationErrorを返す。
    pub fn parse(
        name: Option<String>,
        summary: Option<String>,
        rating: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = require_text("name", name, &mut violations);
        let summary = require_text("summary", summary, &mut violations);
        if rating.is_none() {
            violations.push(Violation::Missing("rating"));
        }

        match (name, summary, rating) {
            (Some(name), Some(summary), Some(rating)) if violations.is_empty() => Ok(Self {
                name,
                summary,
                rating,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            violations.push(Violation::Blank(field));
            None
        }
    }
}
