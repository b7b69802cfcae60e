//! プラグインモジュールのエントリポイント

pub mod rating;

pub use rating::RatingPlugin;
