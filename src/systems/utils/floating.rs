//! 浮き上がり演出の実装
//!
//! コインなど、一定速度で昇りながらフェードアウトする演出の汎用計算

use bevy::prelude::*;

/// 浮き上がりの設定
#[derive(Debug, Clone)]
pub struct FloatingConfig {
    /// 表示時間（秒）
    pub lifetime: f32,
    /// フェードアウトするか
    pub fade_out: bool,
    /// フェードを始める進捗 (0.0〜1.0)
    pub fade_start: f32,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            lifetime: 1.0,
            fade_out: true,
            fade_start: 0.5,
        }
    }
}

/// 経過時間から位置と透明度を求める
/// 返り値: (消すべきか, 位置, 透明度)
pub fn floating_pose(
    config: &FloatingConfig,
    origin: Vec2,
    velocity: Vec2,
    elapsed: f32,
) -> (bool, Vec2, f32) {
    if elapsed >= config.lifetime {
        return (true, origin + velocity * config.lifetime, 0.0);
    }

    let position = origin + velocity * elapsed;

    let progress = (elapsed / config.lifetime).clamp(0.0, 1.0);
    let alpha = if config.fade_out && progress > config.fade_start {
        ((1.0 - progress) / (1.0 - config.fade_start)).clamp(0.0, 1.0)
    } else {
        1.0
    };

    (false, position, alpha)
}
