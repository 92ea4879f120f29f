//! Leaf payloads. Every struct carries the common `name` field and fills in
//! missing fields from its `Default` when deserialized.

use serde::{Deserialize, Serialize};

/// Waits for a fixed time before the parent moves on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delay {
    pub name: String,
    /// Seconds.
    pub delay: f64,
}

impl Default for Delay {
    fn default() -> Self {
        Self {
            name: "Delay".to_string(),
            delay: 1.0,
        }
    }
}

/// Plays an animation from the animation reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub name: String,
    pub key: String,
    pub speed: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            name: "Animation".to_string(),
            key: String::new(),
            speed: 1.0,
        }
    }
}

/// Plays a sound from the sound reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub name: String,
    pub key: String,
    pub volume: f64,
}

impl Default for Sound {
    fn default() -> Self {
        Self {
            name: "Sound".to_string(),
            key: String::new(),
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
    True,
}

/// Adds `factor * stat` of the caster to the base damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub stat: String,
    pub factor: f64,
}

/// A damage instance against the current target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hit {
    pub name: String,
    pub damage: f64,
    pub damage_type: DamageType,
    pub can_crit: bool,
    pub can_miss: bool,
    pub scalers: Vec<Scaler>,
}

impl Default for Hit {
    fn default() -> Self {
        Self {
            name: "Hit".to_string(),
            damage: 10.0,
            damage_type: DamageType::Physical,
            can_crit: true,
            can_miss: true,
            scalers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    Caster,
    Target,
}

/// Applies a status effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub name: String,
    pub status: String,
    pub duration: f64,
    pub stacks: u32,
    pub target: EffectTarget,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            name: "Status".to_string(),
            status: String::new(),
            duration: 3.0,
            stacks: 1,
            target: EffectTarget::Target,
        }
    }
}

/// Spawns characters from the character reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summon {
    pub name: String,
    pub character: String,
    pub count: u32,
    pub duration: f64,
}

impl Default for Summon {
    fn default() -> Self {
        Self {
            name: "Summon".to_string(),
            character: String::new(),
            count: 1,
            duration: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projectile {
    pub name: String,
    /// Animation reference used for the projectile body.
    pub key: String,
    pub speed: f64,
    pub range: f64,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            name: "Projectile".to_string(),
            key: String::new(),
            speed: 12.0,
            range: 20.0,
        }
    }
}
