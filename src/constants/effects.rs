//! タップ演出（揺れ・砂埃・引っかき傷・コイン・お金）の定数

use bevy::prelude::Vec2;

// ----- 寿命（秒） -----

/// 建物の揺れ
pub const SHAKE_LIFETIME: f32 = 0.8;
/// 砂埃パーティクル
pub const DUST_LIFETIME: f32 = 2.0;
/// 引っかき傷
pub const SCRATCH_LIFETIME: f32 = 0.8;
/// 浮き上がるコイン
pub const FLOATING_COIN_LIFETIME: f32 = 3.0;
/// お金アイコンが建物へ吸い込まれる演出
pub const ABSORB_LIFETIME: f32 = 0.8;
/// 吸い込み後にお金アイコンが再表示されるまで
pub const RESTOCK_DELAY: f32 = 0.2;

// ----- 砂埃 -----

pub const DUST_PARTICLE_COUNT: usize = 8;
pub const DUST_SPREAD_X: f32 = 300.0;
pub const DUST_SPREAD_Y: f32 = 125.0;
pub const DUST_SPRITE_COUNT: usize = 9;

// ----- 引っかき傷 -----

pub const SCRATCH_MARK_COUNT: usize = 2;
pub const SCRATCH_SPRITE_COUNT: usize = 9;

// ----- コイン・お金 -----

/// 同時に描画するコイン／お金の上限（超えたら古い順に捨てる）
pub const FLOATING_MAX_COUNT: usize = 6;
/// 満足側で常駐するお金アイコンの数
pub const AMBIENT_MONEY_COUNT: usize = 3;
/// コインの出現位置のばらつき (X)
pub const COIN_SPAWN_SPREAD_X: f32 = 40.0;
/// コインの上昇速度 (ピクセル/秒)
pub const COIN_RISE_SPEED_MIN: f32 = 40.0;
pub const COIN_RISE_SPEED_MAX: f32 = 60.0;
/// コインの横方向ドリフト (ピクセル/秒)
pub const COIN_DRIFT_X: f32 = 8.0;

// ----- 揺れ・ホバー -----

pub const SHAKE_AMPLITUDE: f32 = 6.0;
pub const SHAKE_FREQUENCY: f32 = 30.0;
pub const MONEY_HOVER_AMPLITUDE: f32 = 4.5;
pub const MONEY_HOVER_SPEED: f32 = 2.8;
/// 常駐お金アイコン同士の横間隔
pub const MONEY_SLOT_SPACING: f32 = 28.0;

// ----- 吸い込み -----

/// 座標が取れないときの吸い込みベクトル（真上）
pub const ABSORB_FALLBACK_VECTOR: Vec2 = Vec2::new(0.0, 120.0);
/// 吸い込み終点での縮小率
pub const ABSORB_END_SCALE: f32 = 0.3;
