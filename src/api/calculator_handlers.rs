//! `/api` 配下の計算・リクエスト変換のデモ用ハンドラー
//!
//! 書籍ストアには触れない。書籍の参照は固定のサンプル4冊に対して行う。

use crate::application::calculator::{self, AgeSummary, Bmi, ExamSummary};
use crate::domain::{self, Book, BookId, NewBook};
use axum::Json;
use std::collections::BTreeMap;

use super::{
    error::{ApiError, AppPath, AppQuery},
    types::{ApiResponse, BmiQuery, GreetQuery},
};

/// GET /api/home, GET /api/
pub async fn home() -> &'static str {
    "Home page"
}

/// GET /api/greet?name=John&age=18
///
/// name は必須、age は省略時 0。
pub async fn greet(AppQuery(query): AppQuery<GreetQuery>) -> String {
    tracing::info!(name = %query.name, age = query.age, "greet");
    calculator::greet(&query.name, query.age)
}

/// GET /api/greet2?name=John&age=18 - greet の短縮版
pub async fn greet2(AppQuery(query): AppQuery<GreetQuery>) -> String {
    calculator::greet(&query.name, query.age)
}

/// GET /api/bmi?h=170&w=60
pub async fn bmi(AppQuery(query): AppQuery<BmiQuery>) -> Result<Json<ApiResponse<Bmi>>, ApiError> {
    let result = calculator::bmi(query.h, query.w)?;
    Ok(Json(ApiResponse::success("BMI calculated", result)))
}

/// GET /api/age?age=17&age=21&age=20
pub async fn average_age(
    AppQuery(params): AppQuery<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<AgeSummary>>, ApiError> {
    let ages = values_of(params, "age");
    let summary = calculator::age_summary(&ages)?;
    Ok(Json(ApiResponse::success("calculation succeeded", summary)))
}

/// GET /api/exam?score=80&score=100&score=50
pub async fn exam(
    AppQuery(params): AppQuery<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<ExamSummary>>, ApiError> {
    let scores = values_of(params, "score")
        .into_iter()
        .map(|score| {
            score
                .trim()
                .parse::<i32>()
                .map_err(|_| ApiError::BadRequest(format!("invalid parameter (score={})", score)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = calculator::exam_summary(&scores)?;
    Ok(Json(ApiResponse::success("calculation succeeded", summary)))
}

/// GET /api/book?name=Math&price=12.5 - クエリパラメータをそのまま返す
pub async fn echo_query(
    AppQuery(params): AppQuery<BTreeMap<String, String>>,
) -> Json<ApiResponse<BTreeMap<String, String>>> {
    tracing::debug!(?params, "echo query");
    Json(ApiResponse::success("echo succeeded", params))
}

/// GET /api/book2?name=Math&price=12.5&amount=10&published=true
///
/// クエリを書籍に束縛し、ID 1 を付与して返す。
pub async fn bind_book(AppQuery(book): AppQuery<NewBook>) -> Json<ApiResponse<Book>> {
    Json(ApiResponse::success("echo succeeded", book.with_id(BookId::FIRST)))
}

/// GET /api/book/:id - サンプル書籍からIDで検索
pub async fn sample_book_by_id(
    AppPath(id): AppPath<BookId>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let book = domain::sample_books()
        .into_iter()
        .find(|book| book.id == id)
        .ok_or_else(|| ApiError::BadRequest("no books found".to_string()))?;
    Ok(Json(ApiResponse::success("query succeeded", book)))
}

/// GET /api/book/pub/:flag - サンプル書籍を出刊状態で絞り込み
pub async fn sample_books_by_published(
    AppPath(published): AppPath<bool>,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books: Vec<Book> = domain::sample_books()
        .into_iter()
        .filter(|book| book.published == published)
        .collect();
    if books.is_empty() {
        return Err(ApiError::BadRequest("no books found".to_string()));
    }

    let label = if published { "published" } else { "discontinued" };
    Ok(Json(ApiResponse::success(
        format!("query succeeded: {}", label),
        books,
    )))
}

/// GET /hello, GET /hi
pub async fn hello() -> String {
    format!("Hello {}", chrono::Local::now().to_rfc2822())
}

fn values_of(params: Vec<(String, String)>, key: &str) -> Vec<String> {
    params
        .into_iter()
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value)
        .collect()
}
