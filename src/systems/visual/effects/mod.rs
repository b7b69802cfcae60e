//! タップ演出（揺れ・砂埃・引っかき傷・コイン・お金・吸い込み）

mod components;
mod geometry;
mod scheduler;
mod spawn;
mod tick;

pub use components::*;
pub use geometry::{Anchor, AnchorGeometry, FixedGeometry, NoGeometry, absorb_vector};
pub use scheduler::{EffectScheduler, EffectTimings};
pub use tick::effect_tick_system;
