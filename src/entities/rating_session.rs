//! 評価セッションエンティティ
//!
//! 1回の「建物タップ評価」の状態を保持する。タップ数だけが可変で、
//! 極性（満足／不満足）はセッション生成時に固定される。

use bevy::prelude::*;

use crate::constants::*;

/// 評価の極性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// 満足（建物が育つ）
    Positive,
    /// 不満足（建物が崩れる）
    Negative,
}

impl Polarity {
    pub fn is_positive(self) -> bool {
        matches!(self, Polarity::Positive)
    }
}

impl std::str::FromStr for Polarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" | "satisfaction" | "good" => Ok(Polarity::Positive),
            "negative" | "dissatisfaction" | "bad" => Ok(Polarity::Negative),
            _ => Err(()),
        }
    }
}

/// タップ可能な領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapZone {
    Building,
    /// 満足側はお金袋、不満足側は猫
    Companion,
}

/// 評価対象の店舗（ルーティングから渡される不透明な値）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRef {
    pub id: u64,
    pub name: String,
}

impl StoreRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// タップ処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// カウントが進んだ
    Accepted { click_count: u8 },
    /// 上限到達済みのため何もしなかった
    Ignored,
}

impl TapOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, TapOutcome::Accepted { .. })
    }
}

/// 評価セッション本体
#[derive(Component, Debug, Clone)]
pub struct RatingSession {
    pub store: StoreRef,
    polarity: Polarity,
    click_count: u8,
    max_clicks: u8,
}

impl RatingSession {
    pub fn new(store: StoreRef, polarity: Polarity) -> Self {
        Self {
            store,
            polarity,
            click_count: 0,
            max_clicks: MAX_CLICKS,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    pub fn max_clicks(&self) -> u8 {
        self.max_clicks
    }

    pub fn is_full(&self) -> bool {
        self.click_count >= self.max_clicks
    }

    /// タップを1回登録する。どちらの領域でも数え方は同じで、減算は存在しない。
    pub fn register_tap(&mut self, _zone: TapZone) -> TapOutcome {
        if self.is_full() {
            return TapOutcome::Ignored;
        }
        self.click_count += 1;
        TapOutcome::Accepted {
            click_count: self.click_count,
        }
    }

    /// 「次へ」ボタンを押せるか
    pub fn can_proceed(&self) -> bool {
        self.click_count > 0
    }

    /// コンパニオンアイコンの見た目（0: 未タップ、1: タップ済み）
    pub fn companion_variant(&self) -> usize {
        if self.click_count == 0 {
            COMPANION_VARIANT_IDLE
        } else {
            COMPANION_VARIANT_ACTIVE
        }
    }
}
