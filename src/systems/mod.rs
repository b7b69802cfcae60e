pub mod rating;
pub mod utils;
pub mod visual;

use bevy::prelude::*;

/// 評価システムの実行順序を制御するセット
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RatingSystemSet {
    /// タップのヒットテストとカウンタ更新
    Input,
    /// 確定・離脱によるセッションの消費
    Logic,
    /// 演出の時間経過とビューモデルの再構築
    Visual,
}
