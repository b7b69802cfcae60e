//! 評価セッションの生成・確定・破棄

use bevy::prelude::*;

use super::result::finalize;
use crate::constants::*;
use crate::entities::rating_session::{Polarity, RatingSession, StoreRef, TapZone};
use crate::events::{LeaveRequest, ProceedRequest, ReviewDraftReady};
use crate::interface::view_model::RatingView;
use crate::systems::visual::effects::{EffectScheduler, EffectTimings};

/// タップ領域。セッションエンティティの子として置く
#[derive(Component, Debug, Clone, Copy)]
pub struct TapTarget {
    pub session: Entity,
    pub zone: TapZone,
    pub half_extents: Vec2,
}

impl TapTarget {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let d = (point - center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

/// タップ領域の配置
#[derive(Debug, Clone, Copy)]
pub struct SessionLayout {
    pub building_center: Vec2,
    pub building_half_extents: Vec2,
    pub companion_center: Vec2,
    pub companion_half_extents: Vec2,
}

impl Default for SessionLayout {
    fn default() -> Self {
        Self {
            building_center: BUILDING_CENTER,
            building_half_extents: BUILDING_HALF_EXTENTS,
            companion_center: COMPANION_CENTER,
            companion_half_extents: COMPANION_HALF_EXTENTS,
        }
    }
}

/// 評価セッションをスポーンする。満足側は常駐のお金アイコンもここで配置する
pub fn spawn_rating_session(
    commands: &mut Commands,
    store: StoreRef,
    polarity: Polarity,
    layout: SessionLayout,
    timings: &EffectTimings,
) -> Entity {
    let mut scheduler = EffectScheduler::new(timings.clone());
    let ambient = scheduler.mount_ambient(polarity, &mut rand::thread_rng());

    info!(
        "RATING: Session started store={} ({}) polarity={:?} ambient={}",
        store.id,
        store.name,
        polarity,
        ambient.len()
    );

    let name = format!("RatingSession {}", store.name);
    let session = commands
        .spawn((
            RatingSession::new(store, polarity),
            scheduler,
            RatingView::default(),
            Name::new(name),
        ))
        .id();

    for (zone, center, half_extents) in [
        (
            TapZone::Building,
            layout.building_center,
            layout.building_half_extents,
        ),
        (
            TapZone::Companion,
            layout.companion_center,
            layout.companion_half_extents,
        ),
    ] {
        commands.spawn((
            TapTarget {
                session,
                zone,
                half_extents,
            },
            Transform::from_translation(center.extend(0.0)),
            ChildOf(session),
            Name::new(format!("TapTarget {zone:?}")),
        ));
    }

    session
}

/// 「次へ」: スコアを確定して送出し、セッションを消費する
pub fn proceed_system(
    mut commands: Commands,
    mut proceed_requests: MessageReader<ProceedRequest>,
    mut q_sessions: Query<(&RatingSession, &mut EffectScheduler)>,
    mut drafts: MessageWriter<ReviewDraftReady>,
) {
    for request in proceed_requests.read() {
        let Ok((session, mut scheduler)) = q_sessions.get_mut(request.session) else {
            debug!("RATING: Proceed for unknown session {:?}", request.session);
            continue;
        };
        if scheduler.is_torn_down() {
            continue;
        }

        match finalize(session) {
            Ok(draft) => {
                info!(
                    "RATING: Finalized store={} positive={} score={} clicks={}",
                    draft.store_id,
                    draft.is_positive,
                    draft.score,
                    session.click_count()
                );
                scheduler.teardown();
                drafts.write(ReviewDraftReady {
                    session: request.session,
                    draft,
                });
                commands.entity(request.session).try_despawn();
            }
            Err(err) => {
                warn!("RATING: Proceed blocked for {:?}: {}", request.session, err);
            }
        }
    }
}

/// 画面離脱: 保留中の演出をすべて取り消してからセッションを破棄する
pub fn leave_system(
    mut commands: Commands,
    mut leave_requests: MessageReader<LeaveRequest>,
    mut q_sessions: Query<(&RatingSession, &mut EffectScheduler)>,
) {
    for request in leave_requests.read() {
        let Ok((session, mut scheduler)) = q_sessions.get_mut(request.session) else {
            debug!("RATING: Leave for unknown session {:?}", request.session);
            continue;
        };
        // 同じフレームで確定済み（despawn 待ち）
        if scheduler.is_torn_down() {
            continue;
        }

        let cancelled = scheduler.teardown();
        info!(
            "RATING: Session abandoned store={} clicks={} cancelled_effects={}",
            session.store.id,
            session.click_count(),
            cancelled
        );
        commands.entity(request.session).try_despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_hit_test_uses_half_extents() {
        let target = TapTarget {
            session: Entity::PLACEHOLDER,
            zone: TapZone::Companion,
            half_extents: Vec2::new(40.0, 20.0),
        };
        let center = Vec2::new(100.0, 100.0);
        assert!(target.contains(center, Vec2::new(140.0, 120.0)));
        assert!(target.contains(center, Vec2::new(60.0, 85.0)));
        assert!(!target.contains(center, Vec2::new(141.0, 100.0)));
        assert!(!target.contains(center, Vec2::new(100.0, 79.0)));
    }
}
