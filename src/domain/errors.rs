use thiserror::Error;

/// 入力項目の違反内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// 必須の文字列項目が空、または空白のみ
    #[error("{0} must not be blank")]
    Blank(&'static str),

    /// 必須項目が指定されていない
    #[error("{0} is required")]
    Missing(&'static str),
}

/// 書籍入力のバリデーションエラー
///
/// 永続化の前に検出されたすべての違反をまとめて保持する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// 違反を追加した新しいエラーを返す
    pub fn with(mut self, violation: Violation) -> Self {
        self.violations.push(violation);
        self
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
