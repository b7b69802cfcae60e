//! 建物ステージの選択
//!
//! ステージは保存せず、毎回タップ数から計算し直す。

use crate::constants::*;
use crate::entities::rating_session::Polarity;

/// 極性ごとのステージ画像数
pub fn stage_count(polarity: Polarity) -> usize {
    match polarity {
        Polarity::Positive => POSITIVE_STAGE_COUNT,
        Polarity::Negative => NEGATIVE_STAGE_COUNT,
    }
}

/// タップ数から表示するステージ番号 (0 始まり) を求める。
///
/// - 満足: 2 タップごとに 1 段階育ち、3 で一旦止まる。9 タップ以上で最終段階 4。
/// - 不満足: 1 タップ以下は 9、以降 1 タップごとに 1 段階崩れて 0 まで。
pub fn compute_stage(click_count: u8, polarity: Polarity) -> usize {
    match polarity {
        Polarity::Positive => {
            if click_count >= POSITIVE_FINAL_STAGE_CLICKS {
                return POSITIVE_STAGE_COUNT - 1;
            }
            let grown = click_count.saturating_sub(1) / POSITIVE_CLICKS_PER_STAGE;
            usize::from(grown).min(POSITIVE_STAGE_PLATEAU)
        }
        Polarity::Negative => {
            let top = NEGATIVE_STAGE_COUNT - 1;
            top.saturating_sub(usize::from(click_count.saturating_sub(1)))
        }
    }
}
