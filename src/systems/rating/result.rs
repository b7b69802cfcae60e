//! セッション結果の組み立て
//!
//! 「次へ」が押されたときに最終タップ数からスコアを確定し、
//! 後続のレビュー詳細画面へ渡すペイロードを作る。

use serde::{Deserialize, Serialize};

use super::score::derive_score;
use crate::entities::rating_session::RatingSession;
use crate::error::RatingError;

/// 評価画面から詳細入力画面へ渡す下書き
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub store_id: u64,
    pub store_name: String,
    pub is_positive: bool,
    pub score: u8,
}

/// タグと画像を付けた送信用ペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub store_id: u64,
    pub store_name: String,
    pub is_positive: bool,
    pub score: u8,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl ReviewDraft {
    /// 詳細画面で選ばれたタグと画像参照を付ける。
    /// タグは前後の空白を除き、空のものと重複（先勝ち）を捨てる。
    pub fn into_submission(
        self,
        tags: impl IntoIterator<Item = impl Into<String>>,
        images: impl IntoIterator<Item = impl Into<String>>,
    ) -> ReviewSubmission {
        let mut unique_tags: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into().trim().to_string();
            if tag.is_empty() || unique_tags.contains(&tag) {
                continue;
            }
            unique_tags.push(tag);
        }

        ReviewSubmission {
            store_id: self.store_id,
            store_name: self.store_name,
            is_positive: self.is_positive,
            score: self.score,
            tags: unique_tags,
            images: images.into_iter().map(Into::into).collect(),
        }
    }
}

/// セッションを確定する。タップ 0 回では確定できない。
pub fn finalize(session: &RatingSession) -> Result<ReviewDraft, RatingError> {
    if !session.can_proceed() {
        return Err(RatingError::NoTaps);
    }

    let polarity = session.polarity();
    Ok(ReviewDraft {
        store_id: session.store.id,
        store_name: session.store.name.clone(),
        is_positive: polarity.is_positive(),
        score: derive_score(session.click_count(), polarity),
    })
}
