use bevy::prelude::*;

/// 演出インスタンスの識別子（セッション内で単調増加）。
/// 描画側はこの値をキーにアニメーションを再生し直す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Shake,
    Dust,
    Scratch,
    FloatingCoin,
    FloatingMoney,
    AbsorbMoney,
}

impl EffectKind {
    /// 同種の新しいインスタンスが来たら置き換えられる種類か
    pub fn is_exclusive(self) -> bool {
        !matches!(self, EffectKind::FloatingCoin | EffectKind::FloatingMoney)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustParticle {
    pub offset: Vec2,
    pub sprite: usize,
}

/// 種類ごとのランダム生成パラメータ
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnParams {
    Shake,
    Dust {
        particles: Vec<DustParticle>,
    },
    Scratch {
        sprites: Vec<usize>,
    },
    FloatingCoin {
        origin: Vec2,
        velocity: Vec2,
    },
    FloatingMoney {
        slot: usize,
        phase: f32,
    },
    /// お金アイコンから建物中心へのベクトル（タップ時に一度だけ測る）
    AbsorbMoney {
        vector: Vec2,
    },
}

/// 自動で消える演出1つ分
#[derive(Debug, Clone, PartialEq)]
pub struct EffectInstance {
    pub id: EffectId,
    pub kind: EffectKind,
    pub params: SpawnParams,
    /// 残り時間（秒）。`None` はセッション中ずっと残る常駐演出
    pub lifetime: Option<f32>,
    pub max_lifetime: f32,
    /// 生成からの経過時間（秒）
    pub elapsed: f32,
}

impl EffectInstance {
    /// 0.0 → 1.0 の進捗。常駐演出は常に 0.0
    pub fn progress(&self) -> f32 {
        match self.lifetime {
            Some(lifetime) if self.max_lifetime > 0.0 => {
                1.0 - (lifetime / self.max_lifetime).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.lifetime, Some(lifetime) if lifetime <= 0.0)
    }
}

/// 寿命切れで消えた演出の通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectExpired {
    pub id: EffectId,
    pub kind: EffectKind,
}
