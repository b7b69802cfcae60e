//! タップ演出のスケジューラ
//!
//! セッションごとに1つ持ち、演出を `EffectInstance` の一覧として管理する。
//! 各インスタンスは自分の残り時間を持ち、`tick` でまとめて掃除される。
//! 同種を置き換える演出は常に新しい ID で作り直すので、描画側は ID の変化だけで
//! アニメーションを最初から再生できる。

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use super::geometry::{AnchorGeometry, absorb_vector};
use super::spawn::{roll_coin, roll_dust, roll_money, roll_scratch};
use crate::constants::*;
use crate::entities::rating_session::{Polarity, TapZone};

/// 演出の寿命と上限
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EffectTimings {
    pub shake: f32,
    pub dust: f32,
    pub scratch: f32,
    pub floating_coin: f32,
    pub absorb: f32,
    pub restock: f32,
    /// コイン（およびお金アイコン）を同時に保持する上限
    pub floating_max: usize,
    pub ambient_money: usize,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            shake: SHAKE_LIFETIME,
            dust: DUST_LIFETIME,
            scratch: SCRATCH_LIFETIME,
            floating_coin: FLOATING_COIN_LIFETIME,
            absorb: ABSORB_LIFETIME,
            restock: RESTOCK_DELAY,
            floating_max: FLOATING_MAX_COUNT,
            ambient_money: AMBIENT_MONEY_COUNT,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct EffectScheduler {
    timings: EffectTimings,
    instances: Vec<EffectInstance>,
    next_id: u64,
    /// お金アイコンが再表示されるまでの残り時間
    restock_timer: Option<f32>,
    torn_down: bool,
}

impl Default for EffectScheduler {
    fn default() -> Self {
        Self::new(EffectTimings::default())
    }
}

impl EffectScheduler {
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            timings,
            instances: Vec::new(),
            next_id: 0,
            restock_timer: None,
            torn_down: false,
        }
    }

    pub fn timings(&self) -> &EffectTimings {
        &self.timings
    }

    pub fn instances(&self) -> &[EffectInstance] {
        &self.instances
    }

    pub fn of_kind(&self, kind: EffectKind) -> impl Iterator<Item = &EffectInstance> {
        self.instances.iter().filter(move |i| i.kind == kind)
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.of_kind(kind).next().is_some()
    }

    /// 吸い込みの複製が着地してから補充されるまでの間だけ非表示になる
    pub fn money_icon_visible(&self) -> bool {
        self.restock_timer.is_none()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// 満足側の常駐お金アイコンを配置する。既に配置済みなら何もしない。
    pub fn mount_ambient(&mut self, polarity: Polarity, rng: &mut impl Rng) -> Vec<EffectId> {
        if self.torn_down || !polarity.is_positive() || self.is_active(EffectKind::FloatingMoney) {
            return Vec::new();
        }

        let count = self.timings.ambient_money.min(self.timings.floating_max);
        (0..count)
            .map(|slot| self.spawn(EffectKind::FloatingMoney, roll_money(slot, rng), None))
            .collect()
    }

    /// 受理されたタップに対応する演出を発生させる。
    ///
    /// - 建物: 揺れ + (満足: コイン / 不満足: 砂埃)
    /// - コンパニオン: 満足: 吸い込み / 不満足: 引っかき傷
    pub fn on_tap(
        &mut self,
        polarity: Polarity,
        zone: TapZone,
        geometry: &impl AnchorGeometry,
        rng: &mut impl Rng,
    ) -> Vec<EffectId> {
        if self.torn_down {
            return Vec::new();
        }

        match (zone, polarity) {
            (TapZone::Building, Polarity::Positive) => vec![
                self.spawn(EffectKind::Shake, SpawnParams::Shake, Some(self.timings.shake)),
                self.spawn(
                    EffectKind::FloatingCoin,
                    roll_coin(rng),
                    Some(self.timings.floating_coin),
                ),
            ],
            (TapZone::Building, Polarity::Negative) => vec![
                self.spawn(EffectKind::Shake, SpawnParams::Shake, Some(self.timings.shake)),
                self.spawn(EffectKind::Dust, roll_dust(rng), Some(self.timings.dust)),
            ],
            (TapZone::Companion, Polarity::Positive) => {
                let vector = absorb_vector(geometry);
                vec![self.spawn(
                    EffectKind::AbsorbMoney,
                    SpawnParams::AbsorbMoney { vector },
                    Some(self.timings.absorb),
                )]
            }
            (TapZone::Companion, Polarity::Negative) => vec![self.spawn(
                EffectKind::Scratch,
                roll_scratch(rng),
                Some(self.timings.scratch),
            )],
        }
    }

    /// 時間を進め、寿命切れの演出を取り除く。破棄後は何も起きない。
    pub fn tick(&mut self, dt: f32) -> Vec<EffectExpired> {
        if self.torn_down {
            return Vec::new();
        }

        if let Some(timer) = self.restock_timer.as_mut() {
            *timer -= dt;
            if *timer <= 0.0 {
                self.restock_timer = None;
            }
        }

        let mut expired = Vec::new();
        for instance in self.instances.iter_mut() {
            instance.elapsed += dt;
            if let Some(lifetime) = instance.lifetime.as_mut() {
                *lifetime -= dt;
            }
            if instance.is_expired() {
                expired.push(EffectExpired {
                    id: instance.id,
                    kind: instance.kind,
                });
            }
        }
        self.instances.retain(|i| !i.is_expired());

        // 吸い込みが着地してから補充待ちに入る
        if expired.iter().any(|e| e.kind == EffectKind::AbsorbMoney) {
            self.restock_timer = Some(self.timings.restock);
        }
        expired
    }

    /// 保留中の演出をすべて取り消す。戻り値は取り消した数。
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.instances.len();
        self.instances.clear();
        self.restock_timer = None;
        self.torn_down = true;
        cancelled
    }

    fn spawn(&mut self, kind: EffectKind, params: SpawnParams, lifetime: Option<f32>) -> EffectId {
        if kind.is_exclusive() {
            self.instances.retain(|i| i.kind != kind);
        }

        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.instances.push(EffectInstance {
            id,
            kind,
            params,
            lifetime,
            max_lifetime: lifetime.unwrap_or(0.0),
            elapsed: 0.0,
        });

        if kind == EffectKind::FloatingCoin {
            self.prune_oldest(kind);
        }
        id
    }

    fn prune_oldest(&mut self, kind: EffectKind) {
        let mut excess = self
            .of_kind(kind)
            .count()
            .saturating_sub(self.timings.floating_max);
        // 追加順に並んでいるので先頭側が古い
        self.instances.retain(|i| {
            if excess > 0 && i.kind == kind {
                excess -= 1;
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::visual::effects::geometry::{FixedGeometry, NoGeometry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn kinds(scheduler: &EffectScheduler) -> Vec<EffectKind> {
        scheduler.instances().iter().map(|i| i.kind).collect()
    }

    #[test]
    fn building_tap_fires_shake_and_polarity_effect() {
        let mut rng = rng();
        let mut positive = EffectScheduler::default();
        positive.on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng);
        assert_eq!(kinds(&positive), vec![EffectKind::Shake, EffectKind::FloatingCoin]);

        let mut negative = EffectScheduler::default();
        negative.on_tap(Polarity::Negative, TapZone::Building, &NoGeometry, &mut rng);
        assert_eq!(kinds(&negative), vec![EffectKind::Shake, EffectKind::Dust]);
    }

    #[test]
    fn companion_tap_fires_absorb_or_scratch() {
        let mut rng = rng();
        let mut positive = EffectScheduler::default();
        positive.on_tap(Polarity::Positive, TapZone::Companion, &NoGeometry, &mut rng);
        assert_eq!(kinds(&positive), vec![EffectKind::AbsorbMoney]);
        // 複製が飛んでいる間は元のアイコンも見えている
        assert!(positive.money_icon_visible());

        let mut negative = EffectScheduler::default();
        negative.on_tap(Polarity::Negative, TapZone::Companion, &NoGeometry, &mut rng);
        assert_eq!(kinds(&negative), vec![EffectKind::Scratch]);
        assert!(negative.money_icon_visible());
    }

    #[test]
    fn shake_restarts_on_repeat_tap() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        scheduler.on_tap(Polarity::Negative, TapZone::Building, &NoGeometry, &mut rng);
        let first = scheduler.of_kind(EffectKind::Shake).next().unwrap().id;

        scheduler.tick(0.6);
        scheduler.on_tap(Polarity::Negative, TapZone::Building, &NoGeometry, &mut rng);
        let second = scheduler.of_kind(EffectKind::Shake).next().unwrap().id;
        assert_ne!(first, second);
        assert_eq!(scheduler.of_kind(EffectKind::Shake).count(), 1);

        // 最初の揺れなら切れている時刻でも、再開した揺れは残っている
        scheduler.tick(0.6);
        assert!(scheduler.is_active(EffectKind::Shake));
        scheduler.tick(0.3);
        assert!(!scheduler.is_active(EffectKind::Shake));
    }

    #[test]
    fn new_dust_fully_replaces_previous_batch() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        scheduler.on_tap(Polarity::Negative, TapZone::Building, &NoGeometry, &mut rng);
        let old = scheduler.of_kind(EffectKind::Dust).next().unwrap().clone();

        scheduler.tick(1.5);
        scheduler.on_tap(Polarity::Negative, TapZone::Building, &NoGeometry, &mut rng);
        let dust: Vec<_> = scheduler.of_kind(EffectKind::Dust).cloned().collect();
        assert_eq!(dust.len(), 1);
        assert_ne!(dust[0].id, old.id);
        assert_ne!(dust[0].params, old.params);
        assert_eq!(dust[0].lifetime, Some(DUST_LIFETIME));

        scheduler.tick(1.9);
        assert!(scheduler.is_active(EffectKind::Dust));
        let expired = scheduler.tick(0.2);
        assert!(expired.iter().any(|e| e.id == dust[0].id));
        assert!(!scheduler.is_active(EffectKind::Dust));
    }

    #[test]
    fn coins_expire_independently() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        scheduler.on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng);
        scheduler.tick(1.0);
        scheduler.on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng);
        assert_eq!(scheduler.of_kind(EffectKind::FloatingCoin).count(), 2);

        scheduler.tick(2.1);
        assert_eq!(scheduler.of_kind(EffectKind::FloatingCoin).count(), 1);
        scheduler.tick(1.0);
        assert_eq!(scheduler.of_kind(EffectKind::FloatingCoin).count(), 0);
    }

    #[test]
    fn coin_count_is_capped_oldest_first() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        let mut coin_ids = Vec::new();
        for _ in 0..(FLOATING_MAX_COUNT + 2) {
            let ids =
                scheduler.on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng);
            coin_ids.push(ids[1]);
        }
        let alive: Vec<EffectId> = scheduler
            .of_kind(EffectKind::FloatingCoin)
            .map(|i| i.id)
            .collect();
        assert_eq!(alive, coin_ids[2..].to_vec());
    }

    #[test]
    fn ambient_money_mounts_once_for_positive_only() {
        let mut rng = rng();
        let mut positive = EffectScheduler::default();
        assert_eq!(
            positive.mount_ambient(Polarity::Positive, &mut rng).len(),
            AMBIENT_MONEY_COUNT
        );
        assert!(positive.mount_ambient(Polarity::Positive, &mut rng).is_empty());

        positive.tick(60.0);
        assert_eq!(positive.of_kind(EffectKind::FloatingMoney).count(), AMBIENT_MONEY_COUNT);

        let mut negative = EffectScheduler::default();
        assert!(negative.mount_ambient(Polarity::Negative, &mut rng).is_empty());
    }

    #[test]
    fn ambient_money_respects_cap() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::new(EffectTimings {
            ambient_money: 10,
            floating_max: 4,
            ..default()
        });
        assert_eq!(scheduler.mount_ambient(Polarity::Positive, &mut rng).len(), 4);
    }

    #[test]
    fn absorb_uses_measured_vector_and_restocks() {
        let mut rng = rng();
        let geometry = FixedGeometry {
            building_center: Some(Vec2::new(10.0, 10.0)),
            money_icon: Some(Vec2::new(110.0, -90.0)),
        };
        let mut scheduler = EffectScheduler::default();
        scheduler.on_tap(Polarity::Positive, TapZone::Companion, &geometry, &mut rng);
        let absorb = scheduler.of_kind(EffectKind::AbsorbMoney).next().unwrap();
        assert_eq!(
            absorb.params,
            SpawnParams::AbsorbMoney {
                vector: Vec2::new(-100.0, 100.0)
            }
        );

        scheduler.tick(0.25);
        assert!(scheduler.is_active(EffectKind::AbsorbMoney));
        assert!(scheduler.money_icon_visible());
        scheduler.tick(0.6);
        assert!(!scheduler.is_active(EffectKind::AbsorbMoney));
        assert!(!scheduler.money_icon_visible());
        scheduler.tick(0.25);
        assert!(scheduler.money_icon_visible());
    }

    #[test]
    fn money_icon_hides_only_after_absorb_lands() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        scheduler.mount_ambient(Polarity::Positive, &mut rng);
        scheduler.on_tap(Polarity::Positive, TapZone::Companion, &NoGeometry, &mut rng);

        scheduler.tick(0.3);
        assert!(scheduler.is_active(EffectKind::AbsorbMoney));
        assert!(scheduler.money_icon_visible());

        let expired = scheduler.tick(0.55);
        assert!(expired.iter().any(|e| e.kind == EffectKind::AbsorbMoney));
        assert!(!scheduler.money_icon_visible());

        scheduler.tick(0.1);
        assert!(!scheduler.money_icon_visible());
        scheduler.tick(0.15);
        assert!(scheduler.money_icon_visible());
        assert_eq!(
            scheduler.of_kind(EffectKind::FloatingMoney).count(),
            AMBIENT_MONEY_COUNT
        );
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut rng = rng();
        let mut scheduler = EffectScheduler::default();
        scheduler.mount_ambient(Polarity::Positive, &mut rng);
        scheduler.on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng);
        scheduler.on_tap(Polarity::Positive, TapZone::Companion, &NoGeometry, &mut rng);

        let cancelled = scheduler.teardown();
        assert_eq!(cancelled, AMBIENT_MONEY_COUNT + 3);

        let snapshot = (scheduler.instances().to_vec(), scheduler.money_icon_visible());
        for _ in 0..20 {
            assert!(scheduler.tick(0.5).is_empty());
        }
        assert!(
            scheduler
                .on_tap(Polarity::Positive, TapZone::Building, &NoGeometry, &mut rng)
                .is_empty()
        );
        assert_eq!(
            (scheduler.instances().to_vec(), scheduler.money_icon_visible()),
            snapshot
        );
    }
}
