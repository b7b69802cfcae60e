//! 評価エンジンのエラー型

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// タップ 0 回のまま「次へ」が押された
    #[error("proceed requires at least one tap")]
    NoTaps,
}
