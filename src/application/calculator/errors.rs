use thiserror::Error;

/// 計算エンドポイントの入力エラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// 身長(h)または体重(w)が指定されていない
    #[error("height (h) and weight (w) are required")]
    MissingBodyMeasurements,

    /// 年齢(age)が1件も指定されていない
    #[error("at least one age is required")]
    MissingAges,

    /// 年齢が整数として解釈できない
    #[error("invalid age: {0}")]
    InvalidAge(String),

    /// 点数(score)が1件も指定されていない
    #[error("at least one score is required")]
    MissingScores,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
