use serde::{Deserialize, Serialize};

use super::BookId;

/// 書籍エンティティ
///
/// ストアが所有する唯一の正本。呼び出し側にはコピーが渡される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub price: f64,
    pub amount: i32,
    /// 出刊中かどうか（未指定時は false）
    #[serde(default, alias = "pub")]
    pub published: bool,
}

/// ID未採番の書籍
///
/// 新規登録と全体置換（PUT）の入力として使う。
/// IDはストア側が決めるため、このデータ構造には含めない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub price: f64,
    pub amount: i32,
    #[serde(default, alias = "pub")]
    pub published: bool,
}

impl NewBook {
    /// 採番済みIDを付与して書籍エンティティにする
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            name: self.name,
            price: self.price,
            amount: self.amount,
            published: self.published,
        }
    }
}

impl From<Book> for NewBook {
    fn from(book: Book) -> Self {
        Self {
            name: book.name,
            price: book.price,
            amount: book.amount,
            published: book.published,
        }
    }
}

/// 次に採番するIDを求める（純粋な関数）
///
/// 現在の最大ID + 1。空なら 1。
/// 最大IDの書籍が削除されていれば、そのIDが再び払い出される。
/// 最大IDが `i32::MAX` の場合は採番できず `None`。
pub fn next_book_id(books: &[Book]) -> Option<BookId> {
    match books.iter().map(|book| book.id).max() {
        Some(max) => max.next(),
        None => Some(BookId::FIRST),
    }
}

/// 書名だけを差し替えたコピーを返す
pub fn rename(book: &Book, name: impl Into<String>) -> Book {
    Book {
        name: name.into(),
        ..book.clone()
    }
}

/// 価格だけを差し替えたコピーを返す
pub fn reprice(book: &Book, price: f64) -> Book {
    Book {
        price,
        ..book.clone()
    }
}

/// デモ用の書籍4冊（ID 1〜4）
pub fn sample_books() -> Vec<Book> {
    [
        ("Doraemon", 12.5, 20, false),
        ("Old Master Q", 10.5, 30, false),
        ("Lucky Boy", 8.5, 40, true),
        ("Daughter of the Nile", 14.5, 50, true),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, price, amount, published), id)| Book {
        id: BookId::from_i32(id),
        name: name.to_string(),
        price,
        amount,
        published,
    })
    .collect()
}
