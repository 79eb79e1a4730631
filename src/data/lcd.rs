use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::data::color::{Color, BLACK};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LcdMode {
    #[default]
    Off,
    Clock,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LcdSettings {
    pub mode: LcdMode,
    /// Foreground color; what it tints depends on `mode`.
    pub color: Color,
}

impl Default for LcdSettings {
    fn default() -> Self {
        Self {
            mode: LcdMode::Off,
            color: BLACK,
        }
    }
}
