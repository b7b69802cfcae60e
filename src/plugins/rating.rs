//! 評価エンジンのプラグイン

use crate::assets::ReviewAssets;
use crate::events::{LeaveRequest, PointerTap, ProceedRequest, ReviewDraftReady, TapRequest};
use crate::interface::view_model::rating_view_system;
use crate::systems::RatingSystemSet;
use crate::systems::rating::{leave_system, pointer_tap_system, proceed_system, tap_input_system};
use crate::systems::visual::effects::{EffectTimings, effect_tick_system};
use bevy::prelude::*;

pub struct RatingPlugin;

impl Plugin for RatingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PointerTap>()
            .add_message::<TapRequest>()
            .add_message::<ProceedRequest>()
            .add_message::<LeaveRequest>()
            .add_message::<ReviewDraftReady>()
            .init_resource::<EffectTimings>()
            .init_resource::<ReviewAssets>();

        app.configure_sets(
            Update,
            (
                RatingSystemSet::Input,
                RatingSystemSet::Logic,
                RatingSystemSet::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (pointer_tap_system, tap_input_system)
                .chain()
                .in_set(RatingSystemSet::Input),
        )
        .add_systems(
            Update,
            (proceed_system, leave_system)
                .chain()
                .in_set(RatingSystemSet::Logic),
        )
        .add_systems(
            Update,
            (effect_tick_system, rating_view_system)
                .chain()
                .in_set(RatingSystemSet::Visual),
        );
    }
}
