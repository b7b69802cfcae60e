//! タップ式レビュー評価エンジン
//!
//! 建物（またはコンパニオンアイコン）を叩いた回数から 1〜10 のスコアを決め、
//! タップごとに揺れ・砂埃・コインなどの短命な演出を発生させる。

pub mod assets;
pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod interface;
pub mod plugins;
pub mod script_args;
pub mod systems;

pub use entities::rating_session::{Polarity, RatingSession, StoreRef, TapOutcome, TapZone};
pub use error::RatingError;
pub use plugins::RatingPlugin;
pub use systems::rating::{ReviewDraft, ReviewSubmission, compute_stage, derive_score, finalize};
