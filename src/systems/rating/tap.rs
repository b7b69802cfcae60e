//! タップ入力の処理
//!
//! 建物とコンパニオンアイコンの2つのタップ領域は同じカウンタを進めるが、
//! どちらを押したかと極性によって発生する演出が変わる。

use bevy::prelude::*;

use super::lifecycle::TapTarget;
use super::stage::compute_stage;
use crate::entities::rating_session::{RatingSession, TapOutcome, TapZone};
use crate::events::{PointerTap, TapRequest};
use crate::systems::visual::effects::{Anchor, AnchorGeometry, EffectScheduler};

/// セッションのタップ領域の現在位置を吸い込み演出の座標として使う
pub struct SessionGeometry {
    building_center: Option<Vec2>,
    money_icon: Option<Vec2>,
}

impl SessionGeometry {
    pub fn collect<'a>(
        session: Entity,
        targets: impl IntoIterator<Item = (&'a TapTarget, &'a Transform)>,
    ) -> Self {
        let mut geometry = Self {
            building_center: None,
            money_icon: None,
        };
        for (target, transform) in targets {
            if target.session != session {
                continue;
            }
            let center = transform.translation.truncate();
            match target.zone {
                TapZone::Building => geometry.building_center = Some(center),
                TapZone::Companion => geometry.money_icon = Some(center),
            }
        }
        geometry
    }
}

impl AnchorGeometry for SessionGeometry {
    fn anchor(&self, anchor: Anchor) -> Option<Vec2> {
        match anchor {
            Anchor::BuildingCenter => self.building_center,
            Anchor::MoneyIcon => self.money_icon,
        }
    }
}

/// 生タップをヒットテストしてタップ領域へのリクエストに変換する。
/// コンパニオンアイコンは建物の上に重なるので優先する。
///
/// 画面に出ている評価セッションは1つだけという前提。複数のセッションが同じ配置で
/// 重なっている場合は、1回のタップを Entity の小さい方のセッションだけが受け取る。
/// 特定のセッションを狙うときは `TapRequest` を直接送る。
pub fn pointer_tap_system(
    mut pointer_taps: MessageReader<PointerTap>,
    q_targets: Query<(&TapTarget, &Transform)>,
    mut tap_requests: MessageWriter<TapRequest>,
) {
    for tap in pointer_taps.read() {
        let hit = q_targets
            .iter()
            .filter(|(target, transform)| {
                target.contains(transform.translation.truncate(), tap.position)
            })
            .min_by_key(|(target, _)| {
                let zone_rank = match target.zone {
                    TapZone::Companion => 0,
                    TapZone::Building => 1,
                };
                (zone_rank, target.session)
            });

        let Some((target, _)) = hit else {
            continue;
        };
        tap_requests.write(TapRequest {
            session: target.session,
            zone: target.zone,
        });
    }
}

/// タップをカウンタに反映し、受理されたら演出を発生させる
pub fn tap_input_system(
    mut tap_requests: MessageReader<TapRequest>,
    mut q_sessions: Query<(&mut RatingSession, &mut EffectScheduler)>,
    q_targets: Query<(&TapTarget, &Transform)>,
) {
    let mut rng = rand::thread_rng();

    for request in tap_requests.read() {
        let Ok((mut session, mut scheduler)) = q_sessions.get_mut(request.session) else {
            debug!("RATING: Tap for unknown session {:?}", request.session);
            continue;
        };
        if scheduler.is_torn_down() {
            continue;
        }

        let click_count = match session.register_tap(request.zone) {
            TapOutcome::Accepted { click_count } => click_count,
            TapOutcome::Ignored => {
                debug!(
                    "RATING: Tap ignored at max clicks ({}) zone={:?}",
                    session.max_clicks(),
                    request.zone
                );
                continue;
            }
        };

        let polarity = session.polarity();
        let geometry = SessionGeometry::collect(request.session, q_targets.iter());
        let spawned = scheduler.on_tap(polarity, request.zone, &geometry, &mut rng);

        debug!(
            "RATING: Tap zone={:?} clicks={} stage={} effects={:?}",
            request.zone,
            click_count,
            compute_stage(click_count, polarity),
            spawned
        );
    }
}
