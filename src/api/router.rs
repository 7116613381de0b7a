use axum::{
    Router,
    http::{HeaderValue, Method, Uri, header, header::InvalidHeaderValue},
    routing::{get, patch},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::calculator_handlers::{
    average_age, bind_book, bmi, echo_query, exam, greet, greet2, hello, home, sample_book_by_id,
    sample_books_by_published,
};
use super::error::ApiError;
use super::handlers::{
    AppState, add_book, delete_book, find_all_books, find_books_by_published, get_book_by_id,
    update_book, update_book_name, update_book_name_and_price, update_book_price,
};

/// 全エンドポイントを持つAPIルーターを作成する
///
/// CORSはオリジンが設定値に依存するため、呼び出し側で `cors_layer` を重ねる。
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/hello", get(hello))
        .route("/hi", get(hello))
        .route("/book", get(find_all_books).post(add_book))
        .route(
            "/book/:id",
            get(get_book_by_id)
                .put(update_book)
                .patch(update_book_name_and_price)
                .delete(delete_book),
        )
        .route("/book/price/:id", patch(update_book_price))
        .route("/book/name/:id", patch(update_book_name))
        .route("/book/published/:flag", get(find_books_by_published))
        .nest("/api", api_router())
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// `/api` 配下のデモ用ルート
fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/home", get(home))
        .route("/greet", get(greet))
        .route("/greet2", get(greet2))
        .route("/bmi", get(bmi))
        .route("/age", get(average_age))
        .route("/exam", get(exam))
        .route("/book", get(echo_query))
        .route("/book2", get(bind_book))
        .route("/book/:id", get(sample_book_by_id))
        .route("/book/pub/:flag", get(sample_books_by_published))
}

/// 設定されたフロントエンドのオリジンだけを許可するCORSレイヤー
///
/// JSONボディを送るリクエストはプリフライトで Content-Type を申告するため、
/// このヘッダーも許可する。
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

/// ヘルスチェック
async fn health_check() -> &'static str {
    "OK"
}

/// どのルートにも一致しないリクエスト
async fn not_found(uri: Uri) -> ApiError {
    ApiError::BadRequest(format!("page not found ({})", uri))
}
