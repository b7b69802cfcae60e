use super::scheduler::EffectScheduler;
use bevy::prelude::*;

/// 全セッションの演出を進め、寿命切れを掃除する
pub fn effect_tick_system(
    time: Res<Time>,
    mut q_schedulers: Query<(Entity, &mut EffectScheduler)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (session, mut scheduler) in q_schedulers.iter_mut() {
        for expired in scheduler.tick(dt) {
            trace!(
                "EFFECT: {:?} {:?} expired (session {:?})",
                expired.kind, expired.id, session
            );
        }
    }
}
