mod errors;
mod formulas;

pub use errors::{CalculatorError, Result};
pub use formulas::{
    AgeSummary, Bmi, ExamSummary, PASSING_SCORE, age_summary, bmi, exam_summary, greet,
};
