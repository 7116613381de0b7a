use serde::{Deserialize, Serialize};

/// 統一レスポンスエンベロープ
///
/// 成功時は `data` に結果を、失敗時は `data: null` とメッセージのみを返す。
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// PATCH /book/name/:id のリクエストボディ
#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

/// PATCH /book/price/:id のリクエストボディ
#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub price: f64,
}

/// PATCH /book/:id のリクエストボディ
#[derive(Debug, Deserialize)]
pub struct UpdateNameAndPriceRequest {
    pub name: String,
    pub price: f64,
}

/// GET /api/greet のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    pub name: String,
    #[serde(default)]
    pub age: i32,
}

/// GET /api/bmi のクエリパラメータ（h: 身長cm, w: 体重kg）
#[derive(Debug, Deserialize)]
pub struct BmiQuery {
    pub h: Option<f64>,
    pub w: Option<f64>,
}
