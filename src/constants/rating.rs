//! 評価セッション（タップ数・スコア・段階）関連の定数

/// 1セッションで受け付けるタップの上限
pub const MAX_CLICKS: u8 = 10;

/// スコアの下限・上限
pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

/// 不満足側スコアの基準値（`11 - タップ数`）
pub const NEGATIVE_SCORE_BASE: u8 = 11;

// ----- 建物ステージ -----

/// 満足側: 建物が育っていく段階数
pub const POSITIVE_STAGE_COUNT: usize = 5;
/// 満足側: この回数以上タップすると最終段階に固定される
pub const POSITIVE_FINAL_STAGE_CLICKS: u8 = 9;
/// 満足側: 最終段階の手前で止まる段階
pub const POSITIVE_STAGE_PLATEAU: usize = 3;
/// 満足側: 1段階進むのに必要なタップ数
pub const POSITIVE_CLICKS_PER_STAGE: u8 = 2;

/// 不満足側: 建物が崩れていく段階数
pub const NEGATIVE_STAGE_COUNT: usize = 10;

// ----- コンパニオンアイコン -----

/// タップ前のアイコン表示
pub const COMPANION_VARIANT_IDLE: usize = 0;
/// 1回以上タップした後のアイコン表示
pub const COMPANION_VARIANT_ACTIVE: usize = 1;
