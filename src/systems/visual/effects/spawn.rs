//! 演出ごとのランダムパラメータ生成

use bevy::prelude::*;
use rand::Rng;

use super::components::{DustParticle, SpawnParams};
use crate::constants::*;

/// 砂埃: 建物周辺にばらまく 8 粒
pub fn roll_dust(rng: &mut impl Rng) -> SpawnParams {
    let particles = (0..DUST_PARTICLE_COUNT)
        .map(|_| DustParticle {
            offset: Vec2::new(
                rng.gen_range(-DUST_SPREAD_X..=DUST_SPREAD_X),
                rng.gen_range(-DUST_SPREAD_Y..=DUST_SPREAD_Y),
            ),
            sprite: rng.gen_range(0..DUST_SPRITE_COUNT),
        })
        .collect();
    SpawnParams::Dust { particles }
}

pub fn roll_scratch(rng: &mut impl Rng) -> SpawnParams {
    let sprites = (0..SCRATCH_MARK_COUNT)
        .map(|_| rng.gen_range(0..SCRATCH_SPRITE_COUNT))
        .collect();
    SpawnParams::Scratch { sprites }
}

/// コイン: 建物上部から少しずれた位置に出て、ゆっくり昇る
pub fn roll_coin(rng: &mut impl Rng) -> SpawnParams {
    let origin = Vec2::new(
        rng.gen_range(-COIN_SPAWN_SPREAD_X..=COIN_SPAWN_SPREAD_X),
        BUILDING_HALF_EXTENTS.y * 0.5,
    );
    let velocity = Vec2::new(
        rng.gen_range(-COIN_DRIFT_X..=COIN_DRIFT_X),
        rng.gen_range(COIN_RISE_SPEED_MIN..=COIN_RISE_SPEED_MAX),
    );
    SpawnParams::FloatingCoin { origin, velocity }
}

/// 常駐お金アイコン: 位相をずらしてふわふわさせる
pub fn roll_money(slot: usize, rng: &mut impl Rng) -> SpawnParams {
    SpawnParams::FloatingMoney {
        slot,
        phase: rng.gen_range(0.0..=std::f32::consts::TAU),
    }
}
