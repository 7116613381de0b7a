use crate::application::book::{
    ServiceDependencies, add_book as execute_add_book, delete_book as execute_delete_book,
    find_all_books as execute_find_all_books,
    find_books_by_published as execute_find_books_by_published,
    get_book_by_id as execute_get_book_by_id, update_book as execute_update_book,
    update_book_name as execute_update_book_name,
    update_book_name_and_price as execute_update_book_name_and_price,
    update_book_price as execute_update_book_price,
};
use crate::domain::{Book, BookId, NewBook};
use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    error::{ApiError, AppJson, AppPath},
    types::{ApiResponse, UpdateNameAndPriceRequest, UpdateNameRequest, UpdatePriceRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

type BookResponse = Result<Json<ApiResponse<Book>>, ApiError>;
type BooksResponse = Result<Json<ApiResponse<Vec<Book>>>, ApiError>;

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /book - 全書籍を取得
///
/// 1冊も無い場合は失敗エンベロープを返す。
pub async fn find_all_books(State(state): State<Arc<AppState>>) -> BooksResponse {
    let books = execute_find_all_books(&state.service_deps).await?;
    non_empty(books)
}

/// GET /book/:id - IDで書籍を取得
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
) -> BookResponse {
    let book = execute_get_book_by_id(&state.service_deps, id).await?;
    Ok(Json(ApiResponse::success("query succeeded", book)))
}

/// GET /book/published/:flag - 出刊状態で絞り込み
pub async fn find_books_by_published(
    State(state): State<Arc<AppState>>,
    AppPath(published): AppPath<bool>,
) -> BooksResponse {
    let books = execute_find_books_by_published(&state.service_deps, published).await?;
    non_empty(books)
}

fn non_empty(books: Vec<Book>) -> BooksResponse {
    if books.is_empty() {
        return Err(ApiError::BadRequest("no books found".to_string()));
    }
    Ok(Json(ApiResponse::success("query succeeded", books)))
}

// ============================================================================
// Command handlers (POST / PUT / PATCH / DELETE)
// ============================================================================

/// POST /book - 書籍を追加
///
/// IDはストアが採番し、採番済みの書籍を返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    AppJson(book): AppJson<NewBook>,
) -> BookResponse {
    let book = execute_add_book(&state.service_deps, book).await?;
    Ok(Json(ApiResponse::success("add succeeded", book)))
}

/// PUT /book/:id - 書籍を丸ごと置き換え
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
    AppJson(book): AppJson<NewBook>,
) -> BookResponse {
    let book = execute_update_book(&state.service_deps, id, book).await?;
    Ok(Json(ApiResponse::success("update succeeded", book)))
}

/// PATCH /book/:id - 書名と価格を部分更新
pub async fn update_book_name_and_price(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
    AppJson(req): AppJson<UpdateNameAndPriceRequest>,
) -> BookResponse {
    let book =
        execute_update_book_name_and_price(&state.service_deps, id, req.name, req.price).await?;
    Ok(Json(ApiResponse::success("name and price updated", book)))
}

/// PATCH /book/price/:id - 価格を部分更新
pub async fn update_book_price(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
    AppJson(req): AppJson<UpdatePriceRequest>,
) -> BookResponse {
    let book = execute_update_book_price(&state.service_deps, id, req.price).await?;
    Ok(Json(ApiResponse::success("price updated", book)))
}

/// PATCH /book/name/:id - 書名を部分更新
pub async fn update_book_name(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
    AppJson(req): AppJson<UpdateNameRequest>,
) -> BookResponse {
    let book = execute_update_book_name(&state.service_deps, id, req.name).await?;
    Ok(Json(ApiResponse::success("name updated", book)))
}

/// DELETE /book/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<BookId>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    execute_delete_book(&state.service_deps, id).await?;
    Ok(Json(ApiResponse::success("delete succeeded", String::new())))
}
