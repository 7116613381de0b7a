use crate::domain::{self, Book, BookId, NewBook};
use crate::ports::BookRepository;
use std::sync::Arc;

use super::errors::{BookError, Result};

/// サービスの依存関係
///
/// ストアはアプリケーション起動時に生成され、ここに注入される。
/// グローバルな状態は持たない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
}

/// 全書籍を取得する
pub async fn find_all_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_repository
        .find_all()
        .await
        .map_err(BookError::StoreError)
}

/// 出刊状態で絞り込んだ書籍一覧を取得する
pub async fn find_books_by_published(
    deps: &ServiceDependencies,
    published: bool,
) -> Result<Vec<Book>> {
    let books = find_all_books(deps).await?;
    Ok(books
        .into_iter()
        .filter(|book| book.published == published)
        .collect())
}

/// IDで書籍を取得する
///
/// # エラー
/// - NotFound: 指定IDの書籍が存在しない
pub async fn get_book_by_id(deps: &ServiceDependencies, id: BookId) -> Result<Book> {
    deps.book_repository
        .find_by_id(id)
        .await
        .map_err(BookError::StoreError)?
        .ok_or_else(|| BookError::not_found(id))
}

/// 書籍を追加する
///
/// IDはストアが採番する。戻り値は採番済みの書籍。
///
/// # エラー
/// - OperationFailed: ストアが追加を反映しなかった（採番できるIDが尽きた場合を含む）
pub async fn add_book(deps: &ServiceDependencies, book: NewBook) -> Result<Book> {
    let added = deps
        .book_repository
        .add(book.clone())
        .await
        .map_err(BookError::StoreError)?
        .ok_or_else(|| BookError::OperationFailed(format!("add failed, {:?}", book)))?;

    tracing::info!(book_id = %added.id, "book added");
    Ok(added)
}

/// 書籍を丸ごと置き換える
///
/// # エラー
/// - OperationFailed: 指定IDの書籍が存在しない、またはストアが更新を反映しなかった
pub async fn update_book(deps: &ServiceDependencies, id: BookId, book: NewBook) -> Result<Book> {
    let updated = deps
        .book_repository
        .update(id, book.clone())
        .await
        .map_err(BookError::StoreError)?;

    if !updated {
        return Err(BookError::OperationFailed(format!(
            "update failed, id: {}, {:?}",
            id, book
        )));
    }

    tracing::info!(book_id = %id, "book updated");
    Ok(book.with_id(id))
}

/// 書名だけを変更する（読み取り→変更→全体置換）
///
/// 取得と置換は別々のストア操作であり、アトミックではない。
/// 同じIDへの部分更新が競合した場合は後勝ちになる。
///
/// # エラー
/// - NotFound: 指定IDの書籍が存在しない
/// - OperationFailed: 置換が反映されなかった
pub async fn update_book_name(
    deps: &ServiceDependencies,
    id: BookId,
    name: String,
) -> Result<Book> {
    let book = get_book_by_id(deps, id).await?;
    let renamed = domain::rename(&book, name);
    update_book(deps, renamed.id, renamed.into()).await
}

/// 価格だけを変更する（読み取り→変更→全体置換）
///
/// アトミック性については `update_book_name()` を参照。
pub async fn update_book_price(deps: &ServiceDependencies, id: BookId, price: f64) -> Result<Book> {
    let book = get_book_by_id(deps, id).await?;
    let repriced = domain::reprice(&book, price);
    update_book(deps, repriced.id, repriced.into()).await
}

/// 書名と価格を変更する（読み取り→変更→全体置換）
///
/// アトミック性については `update_book_name()` を参照。
pub async fn update_book_name_and_price(
    deps: &ServiceDependencies,
    id: BookId,
    name: String,
    price: f64,
) -> Result<Book> {
    let book = get_book_by_id(deps, id).await?;
    let changed = domain::reprice(&domain::rename(&book, name), price);
    update_book(deps, changed.id, changed.into()).await
}

/// 書籍を削除する
///
/// # エラー
/// - NotFound: 指定IDの書籍が存在しない
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    let deleted = deps
        .book_repository
        .delete(id)
        .await
        .map_err(BookError::StoreError)?;

    if !deleted {
        return Err(BookError::NotFound(format!(
            "delete failed, id: {}, not found",
            id
        )));
    }

    tracing::info!(book_id = %id, "book deleted");
    Ok(())
}
