use crate::domain::{Book, BookId, NewBook};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// 書籍コレクションの正本を抽象化する。
/// 「見つからない」「反映されなかった」は `Option` / `bool` で返し、
/// `Err` はバックエンド自体の障害（DB接続断など）にのみ使う。
///
/// すべての操作は呼び出し側で同期を取らずに並行実行できなければならない。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 現在の全書籍を返す
    ///
    /// 返されたコレクションは呼び出し時点のスナップショットであり、
    /// その後の書き込みの影響を受けない。
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// IDが一致する最初の書籍を返す
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 書籍を追加し、採番済みの書籍を返す
    ///
    /// 追加が反映されなかった場合は `None`。
    async fn add(&self, book: NewBook) -> Result<Option<Book>>;

    /// 指定IDの書籍を丸ごと置き換える
    ///
    /// フィールド単位のマージは行わない。IDは `id` のまま保たれる。
    /// 対象が存在しない場合は `false`。
    async fn update(&self, id: BookId, book: NewBook) -> Result<bool>;

    /// 指定IDの書籍を削除する。対象が存在しない場合は `false`。
    async fn delete(&self, id: BookId) -> Result<bool>;
}
