//! 描画側へ渡す評価画面のビューモデル
//!
//! セッションと演出一覧から毎フレーム組み立て直す。描画側は `EffectSprite::effect`
//! をキーにアニメーションを管理し、ID が変わったら最初から再生する。

use bevy::prelude::*;

use crate::assets::ReviewAssets;
use crate::constants::*;
use crate::entities::rating_session::{Polarity, RatingSession};
use crate::systems::rating::compute_stage;
use crate::systems::utils::animations::{
    HoverConfig, ShakeConfig, absorb_pose, hover_offset, shake_offset,
};
use crate::systems::utils::floating::{FloatingConfig, floating_pose};
use crate::systems::visual::effects::{
    EffectId, EffectInstance, EffectKind, EffectScheduler, SpawnParams,
};

/// 演出スプライト1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSprite {
    pub effect: EffectId,
    pub kind: EffectKind,
    pub image: String,
    /// 建物中心（お金系はコンパニオン中心）からのオフセット
    pub offset: Vec2,
    pub alpha: f32,
    pub scale: f32,
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct RatingView {
    pub click_count: u8,
    pub stage: usize,
    pub building_image: String,
    pub building_offset: Vec2,
    pub companion_image: String,
    pub companion_visible: bool,
    pub proceed_enabled: bool,
    pub sprites: Vec<EffectSprite>,
}

pub fn rating_view_system(
    assets: Res<ReviewAssets>,
    mut q_sessions: Query<(&RatingSession, &EffectScheduler, &mut RatingView)>,
) {
    for (session, scheduler, mut view) in q_sessions.iter_mut() {
        let next = build_rating_view(session, scheduler, &assets);
        if *view != next {
            *view = next;
        }
    }
}

pub fn build_rating_view(
    session: &RatingSession,
    scheduler: &EffectScheduler,
    assets: &ReviewAssets,
) -> RatingView {
    let polarity = session.polarity();
    let stage = compute_stage(session.click_count(), polarity);

    let shake_config = ShakeConfig::default();
    let building_offset = scheduler
        .of_kind(EffectKind::Shake)
        .next()
        .map(|shake| shake_offset(&shake_config, shake.elapsed, shake.progress()))
        .unwrap_or(Vec2::ZERO);

    let mut sprites = Vec::new();
    for instance in scheduler.instances() {
        push_sprites(&mut sprites, instance, scheduler, assets);
    }

    RatingView {
        click_count: session.click_count(),
        stage,
        building_image: assets.building(polarity, stage).to_string(),
        building_offset,
        companion_image: assets
            .companion(polarity, session.companion_variant())
            .to_string(),
        // 不満足側の猫は隠れない
        companion_visible: polarity == Polarity::Negative || scheduler.money_icon_visible(),
        proceed_enabled: session.can_proceed(),
        sprites,
    }
}

fn push_sprites(
    sprites: &mut Vec<EffectSprite>,
    instance: &EffectInstance,
    scheduler: &EffectScheduler,
    assets: &ReviewAssets,
) {
    let sprite = |image: &str, offset: Vec2, alpha: f32, scale: f32| EffectSprite {
        effect: instance.id,
        kind: instance.kind,
        image: image.to_string(),
        offset,
        alpha,
        scale,
    };

    match &instance.params {
        SpawnParams::Shake => {}
        SpawnParams::Dust { particles } => {
            // 後半でまとめて薄くなる
            let alpha = (1.0 - instance.progress()).clamp(0.0, 1.0);
            for particle in particles {
                sprites.push(sprite(
                    assets.dust(particle.sprite),
                    particle.offset,
                    alpha,
                    1.0,
                ));
            }
        }
        SpawnParams::Scratch { sprites: marks } => {
            for (i, mark) in marks.iter().enumerate() {
                // 2本目は少しずらして重ねる
                let offset = Vec2::new(i as f32 * 12.0, i as f32 * -8.0);
                sprites.push(sprite(assets.scratch(*mark), offset, 1.0, 1.0));
            }
        }
        SpawnParams::FloatingCoin { origin, velocity } => {
            let config = FloatingConfig {
                lifetime: scheduler.timings().floating_coin,
                ..default()
            };
            let (done, offset, alpha) =
                floating_pose(&config, *origin, *velocity, instance.elapsed);
            if !done {
                sprites.push(sprite(&assets.coin, offset, alpha, 1.0));
            }
        }
        SpawnParams::FloatingMoney { slot, phase } => {
            let x = (*slot as f32 - 1.0) * MONEY_SLOT_SPACING;
            let y = hover_offset(&HoverConfig::default(), instance.elapsed, *phase);
            sprites.push(sprite(&assets.money, Vec2::new(x, y), 1.0, 1.0));
        }
        SpawnParams::AbsorbMoney { vector } => {
            let (offset, scale, alpha) = absorb_pose(*vector, instance.progress());
            sprites.push(sprite(&assets.money, offset, alpha, scale));
        }
    }
}
