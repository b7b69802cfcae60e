//! 描画・入力側とのインターフェース

pub mod view_model;
