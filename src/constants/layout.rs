//! タップ領域の既定レイアウト（画面座標、Y上向き）

use bevy::prelude::Vec2;

/// 建物の中心
pub const BUILDING_CENTER: Vec2 = Vec2::new(0.0, 0.0);
/// 建物のタップ判定（半径ではなく半幅・半高）
pub const BUILDING_HALF_EXTENTS: Vec2 = Vec2::new(150.0, 180.0);

/// コンパニオンアイコン（満足側はお金袋、不満足側は猫）の中心
pub const COMPANION_CENTER: Vec2 = Vec2::new(120.0, -220.0);
pub const COMPANION_HALF_EXTENTS: Vec2 = Vec2::new(40.0, 40.0);
