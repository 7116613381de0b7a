use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - ストアが採番する整数ID
///
/// 呼び出し側が新規書籍のIDを指定することはない。
/// 採番は常に「現在の最大ID + 1」で行われる（永続カウンタではない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i32);

impl BookId {
    /// 空のストアで最初に採番されるID
    pub const FIRST: BookId = BookId(1);

    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// このIDの次のID。`i32::MAX` の次は存在しないので `None`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
