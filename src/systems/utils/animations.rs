//! 汎用アニメーション実装
//!
//! 揺れ・ホバー・吸い込みなど、経過時間から見た目の値を返す純粋関数

use bevy::prelude::*;

use crate::constants::*;

/// 揺れアニメーション設定
#[derive(Debug, Clone)]
pub struct ShakeConfig {
    /// 最大振れ幅（ピクセル）
    pub amplitude: f32,
    /// 振動数（ラジアン/秒）
    pub frequency: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            amplitude: SHAKE_AMPLITUDE,
            frequency: SHAKE_FREQUENCY,
        }
    }
}

/// 揺れのオフセットを返す。進捗に応じて減衰し、終了時は 0
pub fn shake_offset(config: &ShakeConfig, elapsed: f32, progress: f32) -> Vec2 {
    let decay = (1.0 - progress).clamp(0.0, 1.0);
    let x = (elapsed * config.frequency).sin() * config.amplitude * decay;
    // 縦方向は半分の振れ幅・半周期ずらし
    let y = (elapsed * config.frequency * 0.5).cos() * config.amplitude * 0.5 * decay;
    Vec2::new(x, y)
}

/// ホバーアニメーション設定
#[derive(Debug, Clone)]
pub struct HoverConfig {
    pub amplitude: f32,
    pub speed: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            amplitude: MONEY_HOVER_AMPLITUDE,
            speed: MONEY_HOVER_SPEED,
        }
    }
}

/// 常駐アイコンの上下ゆらぎ（ループ）
pub fn hover_offset(config: &HoverConfig, elapsed: f32, phase: f32) -> f32 {
    (elapsed * config.speed + phase).sin() * config.amplitude
}

/// 吸い込み演出: ベクトルに沿って Ease-out で移動しつつ縮む。
/// 返り値: (オフセット, スケール, 透明度)
pub fn absorb_pose(vector: Vec2, progress: f32) -> (Vec2, f32, f32) {
    let t = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(2);
    let scale = 1.0 + (ABSORB_END_SCALE - 1.0) * eased;
    // 後半でフェードアウト
    let alpha = if t < 0.5 { 1.0 } else { (1.0 - t) / 0.5 };
    (vector * eased, scale, alpha)
}
