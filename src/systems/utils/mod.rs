pub mod animations;
pub mod floating;
