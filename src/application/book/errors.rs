use crate::domain::BookId;
use thiserror::Error;

/// 書籍アプリケーション層のエラー
///
/// ストアの `Option` / `bool` による失敗通知は、この層で初めてエラーに変換される。
/// メッセージには対象IDと操作が含まれ、API層はメッセージだけを取り出して返す。
#[derive(Debug, Error)]
pub enum BookError {
    /// 指定IDの書籍が存在しない
    #[error("{0}")]
    NotFound(String),

    /// ストアへの変更が反映されなかった
    #[error("{0}")]
    OperationFailed(String),

    /// ストアのバックエンド障害
    #[error("Book store error")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BookError {
    pub(super) fn not_found(id: BookId) -> Self {
        BookError::NotFound(format!("id: {}, not found", id))
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookError>;
