use crate::domain::{self, Book, BookId, NewBook};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// BookRepositoryのインメモリ実装（コピーオンライト）
///
/// 書籍コレクションは不変のスナップショット `Arc<Vec<Book>>` として公開される。
/// 書き込みは現在のスナップショットを複製して変更し、新しいスナップショットを
/// アトミックに差し替える。読み取りはロックを取らず、差し替え途中の状態を見ることはない。
///
/// 書き込みごとに O(n) の複製が発生するため、小規模で読み取り中心の
/// カタログ向け。大規模データへの流用はスケーラビリティ上の制約になる。
pub struct BookRepository {
    snapshot: ArcSwap<Vec<Book>>,
    // 書き込み同士の直列化用。読み取りは取得しない
    writer: Mutex<()>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::from_books(Vec::new())
    }

    /// 既存の書籍リストから作成する
    pub fn from_books(books: Vec<Book>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(books),
            writer: Mutex::new(()),
        }
    }

    /// デモ用の初期書籍4冊を登録済みの状態で作成する
    pub fn with_seed_books() -> Self {
        Self::from_books(domain::sample_books())
    }

    /// 現在のスナップショットを複製せずに返す
    pub fn snapshot(&self) -> Arc<Vec<Book>> {
        self.snapshot.load_full()
    }

    /// 現在のスナップショットを複製して変更し、新しいスナップショットとして公開する
    ///
    /// `mutate` が `None` を返した場合は何も公開しない。
    fn write<T>(&self, mutate: impl FnOnce(&mut Vec<Book>) -> Option<T>) -> Option<T> {
        // ガードが守るデータは無いので、poisonされていても続行してよい
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.snapshot.load_full();
        let mut next = Vec::clone(&current);
        let outcome = mutate(&mut next)?;
        self.snapshot.store(Arc::new(next));
        Some(outcome)
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(Vec::clone(&self.snapshot()))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.snapshot().iter().find(|book| book.id == id).cloned())
    }

    async fn add(&self, book: NewBook) -> Result<Option<Book>> {
        let added = self.write(|books| {
            let book = book.with_id(domain::next_book_id(books)?);
            books.push(book.clone());
            Some(book)
        });

        if let Some(book) = &added {
            tracing::debug!(book_id = %book.id, "book added to in-memory store");
        }
        Ok(added)
    }

    async fn update(&self, id: BookId, book: NewBook) -> Result<bool> {
        let updated = self
            .write(|books| {
                let position = books.iter().position(|stored| stored.id == id)?;
                books[position] = book.with_id(id);
                Some(())
            })
            .is_some();

        tracing::debug!(book_id = %id, updated, "in-memory update");
        Ok(updated)
    }

    async fn delete(&self, id: BookId) -> Result<bool> {
        let deleted = self
            .write(|books| {
                let position = books.iter().position(|stored| stored.id == id)?;
                books.remove(position);
                Some(())
            })
            .is_some();

        tracing::debug!(book_id = %id, deleted, "in-memory delete");
        Ok(deleted)
    }
}
