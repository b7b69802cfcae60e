//! 吸い込み演出用の座標取得
//!
//! 実座標はタップ時に一度だけ読む。読めなかった場合は真上へのベクトルで代用し、
//! タップ自体の状態更新は止めない。

use bevy::prelude::*;

use crate::constants::*;

/// 座標を読みたい対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    BuildingCenter,
    MoneyIcon,
}

/// 画面上の位置を返す能力。未配置・未計測なら `None`
pub trait AnchorGeometry {
    fn anchor(&self, anchor: Anchor) -> Option<Vec2>;
}

/// 何も計測できない環境（テスト・サーバー側描画など）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeometry;

impl AnchorGeometry for NoGeometry {
    fn anchor(&self, _anchor: Anchor) -> Option<Vec2> {
        None
    }
}

/// あらかじめ分かっている座標を返す
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeometry {
    pub building_center: Option<Vec2>,
    pub money_icon: Option<Vec2>,
}

impl AnchorGeometry for FixedGeometry {
    fn anchor(&self, anchor: Anchor) -> Option<Vec2> {
        match anchor {
            Anchor::BuildingCenter => self.building_center,
            Anchor::MoneyIcon => self.money_icon,
        }
    }
}

/// お金アイコンから建物中心へのベクトル
pub fn absorb_vector(geometry: &impl AnchorGeometry) -> Vec2 {
    let (Some(from), Some(to)) = (
        geometry.anchor(Anchor::MoneyIcon),
        geometry.anchor(Anchor::BuildingCenter),
    ) else {
        return ABSORB_FALLBACK_VECTOR;
    };

    let vector = to - from;
    if vector.is_finite() {
        vector
    } else {
        ABSORB_FALLBACK_VECTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_vector_points_at_building() {
        let geometry = FixedGeometry {
            building_center: Some(Vec2::new(0.0, 0.0)),
            money_icon: Some(Vec2::new(120.0, -220.0)),
        };
        assert_eq!(absorb_vector(&geometry), Vec2::new(-120.0, 220.0));
    }

    #[test]
    fn missing_anchor_falls_back_to_straight_up() {
        assert_eq!(absorb_vector(&NoGeometry), ABSORB_FALLBACK_VECTOR);
        let half = FixedGeometry {
            building_center: Some(Vec2::ZERO),
            money_icon: None,
        };
        assert_eq!(absorb_vector(&half), ABSORB_FALLBACK_VECTOR);
    }

    #[test]
    fn non_finite_measurement_falls_back() {
        let geometry = FixedGeometry {
            building_center: Some(Vec2::new(f32::NAN, 0.0)),
            money_icon: Some(Vec2::ZERO),
        };
        assert_eq!(absorb_vector(&geometry), ABSORB_FALLBACK_VECTOR);
    }
}
