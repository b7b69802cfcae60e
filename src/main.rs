use std::collections::VecDeque;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

use tap_rating::events::{ProceedRequest, ReviewDraftReady, TapRequest};
use tap_rating::script_args::parse_from_args_or_env;
use tap_rating::systems::RatingSystemSet;
use tap_rating::systems::rating::{SessionLayout, spawn_rating_session};
use tap_rating::systems::visual::effects::EffectTimings;
use tap_rating::{Polarity, RatingPlugin, StoreRef, TapZone};

/// 最後のタップから「次へ」までに演出を流しておくフレーム数
const SETTLE_FRAMES: u32 = 30;
/// 「次へ」を送ってから結果を待つフレーム数
const PROCEED_TIMEOUT_FRAMES: u32 = 3;

/// コマンドラインで与えたタップ列を1フレームに1回ずつ流すデモ台本
#[derive(Resource)]
struct DemoScript {
    store: StoreRef,
    polarity: Polarity,
    taps: VecDeque<TapZone>,
    session: Option<Entity>,
    settle_frames: u32,
    waiting_frames: Option<u32>,
}

impl DemoScript {
    fn from_args_or_env() -> Self {
        let polarity = parse_from_args_or_env("--polarity", "RATING_POLARITY", Polarity::Positive);
        let taps: String = parse_from_args_or_env("--taps", "RATING_TAPS", "bbbbbbb".to_string());
        let store_id = parse_from_args_or_env("--store-id", "RATING_STORE_ID", 1_u64);
        let store_name = parse_from_args_or_env(
            "--store-name",
            "RATING_STORE_NAME",
            "Demo Store".to_string(),
        );

        Self {
            store: StoreRef::new(store_id, store_name),
            polarity,
            taps: parse_taps(&taps),
            session: None,
            settle_frames: SETTLE_FRAMES,
            waiting_frames: None,
        }
    }
}

/// `b` = 建物、`c` = コンパニオン。それ以外の文字は読み飛ばす
fn parse_taps(script: &str) -> VecDeque<TapZone> {
    script
        .chars()
        .filter_map(|c| match c.to_ascii_lowercase() {
            'b' => Some(TapZone::Building),
            'c' => Some(TapZone::Companion),
            _ => None,
        })
        .collect()
}

fn main() {
    let script = DemoScript::from_args_or_env();

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(bevy::log::LogPlugin {
            level: bevy::log::Level::INFO,
            filter: "tap_rating=debug".to_string(),
            ..default()
        })
        .add_plugins(RatingPlugin)
        .insert_resource(script)
        .add_systems(Startup, start_demo_session)
        .add_systems(
            Update,
            (
                drive_script_system.before(RatingSystemSet::Input),
                report_draft_system.after(RatingSystemSet::Logic),
            ),
        )
        .run();
}

fn start_demo_session(
    mut commands: Commands,
    mut script: ResMut<DemoScript>,
    timings: Res<EffectTimings>,
) {
    let session = spawn_rating_session(
        &mut commands,
        script.store.clone(),
        script.polarity,
        SessionLayout::default(),
        &timings,
    );
    script.session = Some(session);
    info!("DEMO: {} taps queued", script.taps.len());
}

fn drive_script_system(
    mut script: ResMut<DemoScript>,
    mut tap_requests: MessageWriter<TapRequest>,
    mut proceed_requests: MessageWriter<ProceedRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(session) = script.session else {
        return;
    };

    if let Some(waiting) = script.waiting_frames.as_mut() {
        *waiting += 1;
        if *waiting > PROCEED_TIMEOUT_FRAMES {
            error!("DEMO: Proceed produced no draft");
            exit.write(AppExit::error());
        }
        return;
    }

    if let Some(zone) = script.taps.pop_front() {
        tap_requests.write(TapRequest { session, zone });
        return;
    }

    if script.settle_frames > 0 {
        script.settle_frames -= 1;
        return;
    }

    proceed_requests.write(ProceedRequest { session });
    script.waiting_frames = Some(0);
}

fn report_draft_system(
    mut drafts: MessageReader<ReviewDraftReady>,
    mut exit: MessageWriter<AppExit>,
) {
    for ready in drafts.read() {
        match serde_json::to_string_pretty(&ready.draft) {
            Ok(json) => println!("{json}"),
            Err(err) => error!("DEMO: Failed to encode draft: {}", err),
        }
        exit.write(AppExit::Success);
    }
}
