use crate::application::book::BookError;
use crate::application::calculator::CalculatorError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ApiResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// ドメインエラーはメッセージだけを取り出し、失敗エンベロープとして返す。
#[derive(Debug)]
pub enum ApiError {
    Book(BookError),
    Calculator(CalculatorError),
    /// パス・クエリ・ボディの解釈失敗、または空の検索結果
    BadRequest(String),
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        ApiError::Book(err)
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        ApiError::Calculator(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid parameter ({})", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("invalid parameter ({})", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid parameter ({})", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // 400 Bad Request - 存在しないID、反映されなかった変更
            ApiError::Book(BookError::NotFound(msg))
            | ApiError::Book(BookError::OperationFailed(msg)) => (StatusCode::BAD_REQUEST, msg),

            // 500 Internal Server Error - ストア障害
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Book(BookError::StoreError(e)) => {
                tracing::error!("Book store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }

            ApiError::Calculator(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ApiResponse::<()>::error(message));
        (status, body).into_response()
    }
}

/// 解釈失敗を失敗エンベロープで返すJSONボディ抽出子
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// 解釈失敗を失敗エンベロープで返すパス抽出子
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

/// 解釈失敗を失敗エンベロープで返すクエリ抽出子
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);
