//! 評価ロジック（スコア・ステージ・タップ処理・セッション管理）

mod lifecycle;
mod result;
mod score;
mod stage;
mod tap;

pub use lifecycle::{
    SessionLayout, TapTarget, leave_system, proceed_system, spawn_rating_session,
};
pub use result::{ReviewDraft, ReviewSubmission, finalize};
pub use score::derive_score;
pub use stage::{compute_stage, stage_count};
pub use tap::{SessionGeometry, pointer_tap_system, tap_input_system};
