use crate::domain::{Book, BookId, NewBook};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        id: BookId::from_i32(row.get("id")),
        name: row.get("name"),
        price: row.get("price"),
        amount: row.get("amount"),
        published: row.get("published"),
    }
}

/// BookRepositoryのPostgreSQL実装
///
/// 既存の `book` テーブルを前提とする（マイグレーションは行わない）。
/// 出刊フラグの列名は `pub` で、読み取り時に `published` として取り出す:
///
/// ```sql
/// CREATE TABLE book (
///     id     SERIAL PRIMARY KEY,
///     name   TEXT NOT NULL,
///     price  DOUBLE PRECISION NOT NULL,
///     amount INTEGER NOT NULL,
///     pub    BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// IDはDBのシーケンスで採番されるため、インメモリ実装の「最大ID + 1」とは
/// 異なり削除済みIDは再利用されない。サービス層から見た成功・失敗条件は同じ。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self) -> Result<Vec<Book>> {
        let books: Vec<Book> =
            sqlx::query("SELECT id, name, price, amount, pub AS published FROM book ORDER BY id")
                .fetch(&self.pool)
                .map_ok(|row| map_row_to_book(&row))
                .try_collect()
                .await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            "SELECT id, name, price, amount, pub AS published FROM book WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn add(&self, book: NewBook) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            INSERT INTO book (name, price, amount, pub)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, amount, pub AS published
            "#,
        )
        .bind(&book.name)
        .bind(book.price)
        .bind(book.amount)
        .bind(book.published)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn update(&self, id: BookId, book: NewBook) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE book
            SET name = $1, price = $2, amount = $3, pub = $4
            WHERE id = $5
            "#,
        )
        .bind(&book.name)
        .bind(book.price)
        .bind(book.amount)
        .bind(book.published)
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: BookId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
