use crate::entities::rating_session::TapZone;
use crate::systems::rating::ReviewDraft;
use bevy::prelude::*;

/// 画面上の生タップ（ヒットテスト前）
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerTap {
    pub position: Vec2,
}

/// セッションの特定領域へのタップ
#[derive(Message, Debug, Clone, Copy)]
pub struct TapRequest {
    pub session: Entity,
    pub zone: TapZone,
}

/// 「次へ」が押された
#[derive(Message, Debug, Clone, Copy)]
pub struct ProceedRequest {
    pub session: Entity,
}

/// 評価を完了せずに画面を離れた
#[derive(Message, Debug, Clone, Copy)]
pub struct LeaveRequest {
    pub session: Entity,
}

/// 評価が確定し、詳細入力画面へ渡せる状態になった
#[derive(Message, Debug, Clone)]
pub struct ReviewDraftReady {
    pub session: Entity,
    pub draft: ReviewDraft,
}
