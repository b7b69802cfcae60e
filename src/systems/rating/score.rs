//! タップ数からレビュースコア (1〜10) を求める

use crate::constants::*;
use crate::entities::rating_session::Polarity;

/// 最終タップ数からスコアを導出する。
///
/// 満足側はタップ数そのもの、不満足側は `11 - タップ数` を [1, 10] に収める。
/// 建物ステージとは独立しており、ステージが頭打ちになってもスコアは伸び続ける。
/// タップ数 0 でも値は返るが、その状態で「次へ」を押させないのは呼び出し側の責務。
pub fn derive_score(click_count: u8, polarity: Polarity) -> u8 {
    let raw = match polarity {
        Polarity::Positive => i16::from(click_count),
        Polarity::Negative => i16::from(NEGATIVE_SCORE_BASE) - i16::from(click_count),
    };
    raw.clamp(i16::from(SCORE_MIN), i16::from(SCORE_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_score_tracks_clicks() {
        assert_eq!(derive_score(1, Polarity::Positive), 1);
        assert_eq!(derive_score(7, Polarity::Positive), 7);
        assert_eq!(derive_score(10, Polarity::Positive), 10);
    }

    #[test]
    fn negative_score_is_inverted() {
        assert_eq!(derive_score(1, Polarity::Negative), 10);
        assert_eq!(derive_score(6, Polarity::Negative), 5);
        assert_eq!(derive_score(10, Polarity::Negative), 1);
    }

    #[test]
    fn zero_and_overflow_stay_in_range() {
        assert_eq!(derive_score(0, Polarity::Positive), 1);
        assert_eq!(derive_score(0, Polarity::Negative), 10);
        assert_eq!(derive_score(u8::MAX, Polarity::Positive), 10);
        assert_eq!(derive_score(u8::MAX, Polarity::Negative), 1);
    }

    #[test]
    fn repeated_derivation_is_stable() {
        for clicks in 0..=MAX_CLICKS {
            for polarity in [Polarity::Positive, Polarity::Negative] {
                assert_eq!(
                    derive_score(clicks, polarity),
                    derive_score(clicks, polarity)
                );
            }
        }
    }
}
