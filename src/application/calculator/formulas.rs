use serde::{Deserialize, Serialize};

use super::errors::{CalculatorError, Result};

/// 及格点
pub const PASSING_SCORE: i32 = 60;

/// 成人とみなす年齢
const ADULT_AGE: i32 = 18;

/// BMI計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
}

/// 年齢集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSummary {
    pub ages: Vec<String>,
    /// 小数点以下1桁に整形した平均年齢
    pub average: String,
}

/// 点数集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSummary {
    pub max: i32,
    pub min: i32,
    pub average: f64,
    pub sum: i64,
    pub passed: Vec<i32>,
    pub failed: Vec<i32>,
}

/// 挨拶文を作る
pub fn greet(name: &str, age: i32) -> String {
    let label = if age >= ADULT_AGE { "adult" } else { "minor" };
    format!("Hi {} {} ({})", name, age, label)
}

/// BMIを計算する（身長はcm、体重はkg）
pub fn bmi(height: Option<f64>, weight: Option<f64>) -> Result<Bmi> {
    let (Some(height), Some(weight)) = (height, weight) else {
        return Err(CalculatorError::MissingBodyMeasurements);
    };

    let meters = height / 100.0;
    Ok(Bmi {
        height,
        weight,
        bmi: weight / (meters * meters),
    })
}

/// 年齢の平均を求める
///
/// 入力はクエリ文字列のまま受け取り、レスポンスにもそのまま含める。
pub fn age_summary(ages: &[String]) -> Result<AgeSummary> {
    if ages.is_empty() {
        return Err(CalculatorError::MissingAges);
    }

    let parsed = ages
        .iter()
        .map(|age| {
            age.trim()
                .parse::<i32>()
                .map_err(|_| CalculatorError::InvalidAge(age.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let average = parsed.iter().map(|&age| f64::from(age)).sum::<f64>() / parsed.len() as f64;

    Ok(AgeSummary {
        ages: ages.to_vec(),
        average: format!("{:.1}", average),
    })
}

/// 点数の統計を求め、及格・不及格に振り分ける
pub fn exam_summary(scores: &[i32]) -> Result<ExamSummary> {
    let (Some(&max), Some(&min)) = (scores.iter().max(), scores.iter().min()) else {
        return Err(CalculatorError::MissingScores);
    };

    let sum: i64 = scores.iter().map(|&score| i64::from(score)).sum();
    let (passed, failed) = scores.iter().partition(|&&score| score >= PASSING_SCORE);

    Ok(ExamSummary {
        max,
        min,
        average: sum as f64 / scores.len() as f64,
        sum,
        passed,
        failed,
    })
}
