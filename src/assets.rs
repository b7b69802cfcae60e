//! 評価画面で使う画像アセットのカタログ
//!
//! すべて 0 始まりの番号で引く。描画側はここで得たパスをそのままロードする。

use bevy::prelude::*;

use crate::constants::*;
use crate::entities::rating_session::Polarity;
use crate::systems::rating::stage_count;

const ASSET_ROOT: &str = "textures/review";

#[derive(Resource, Debug, Clone)]
pub struct ReviewAssets {
    // 建物ステージ
    pub building_positive: Vec<String>,
    pub building_negative: Vec<String>,
    // コンパニオンアイコン（0: 未タップ, 1: タップ済み）
    pub companion_positive: Vec<String>,
    pub companion_negative: Vec<String>,
    // 演出スプライト
    pub dust: Vec<String>,
    pub scratch: Vec<String>,
    pub coin: String,
    pub money: String,
}

impl Default for ReviewAssets {
    fn default() -> Self {
        Self {
            building_positive: indexed("satisfaction/building", stage_count(Polarity::Positive)),
            building_negative: indexed("dissatisfaction/building", stage_count(Polarity::Negative)),
            companion_positive: indexed("satisfaction/money_bag", 2),
            companion_negative: indexed("dissatisfaction/cat", 2),
            dust: indexed("effects/dust", DUST_SPRITE_COUNT),
            scratch: indexed("effects/scratch", SCRATCH_SPRITE_COUNT),
            coin: format!("{ASSET_ROOT}/effects/coin.png"),
            money: format!("{ASSET_ROOT}/effects/money.png"),
        }
    }
}

fn indexed(stem: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{ASSET_ROOT}/{stem}_{i}.png"))
        .collect()
}

/// 範囲外の番号は最後の要素に丸める。空なら空文字列
fn pick(list: &[String], index: usize) -> &str {
    list.get(index)
        .or_else(|| list.last())
        .map(String::as_str)
        .unwrap_or("")
}

impl ReviewAssets {
    pub fn building(&self, polarity: Polarity, stage: usize) -> &str {
        match polarity {
            Polarity::Positive => pick(&self.building_positive, stage),
            Polarity::Negative => pick(&self.building_negative, stage),
        }
    }

    pub fn companion(&self, polarity: Polarity, variant: usize) -> &str {
        match polarity {
            Polarity::Positive => pick(&self.companion_positive, variant),
            Polarity::Negative => pick(&self.companion_negative, variant),
        }
    }

    pub fn dust(&self, sprite: usize) -> &str {
        pick(&self.dust, sprite)
    }

    pub fn scratch(&self, sprite: usize) -> &str {
        pick(&self.scratch, sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_stage_counts() {
        let assets = ReviewAssets::default();
        assert_eq!(assets.building_positive.len(), POSITIVE_STAGE_COUNT);
        assert_eq!(assets.building_negative.len(), NEGATIVE_STAGE_COUNT);
        assert_eq!(
            assets.building(Polarity::Negative, 9),
            "textures/review/dissatisfaction/building_9.png"
        );
    }

    #[test]
    fn out_of_range_index_clamps_to_last() {
        let assets = ReviewAssets::default();
        assert_eq!(
            assets.building(Polarity::Positive, 99),
            assets.building(Polarity::Positive, POSITIVE_STAGE_COUNT - 1)
        );
        assert_eq!(pick(&[], 0), "");
    }
}
