use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{formats::Strict, serde_as, DurationMilliSeconds};
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
pub enum LedMode {
    #[default]
    Off,
    Static,
    Fade,
}

/// A named fade palette kept next to the active one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedFade {
    pub name: String,
    pub colors: Vec<Color>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FadeSettings {
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub saved: SavedFade,
    /// Time to fade from one color to the next. Whole milliseconds, written
    /// as an integer millisecond count.
    #[serde_as(as = "DurationMilliSeconds<u64, Strict>")]
    #[serde(default)]
    fade_time: Duration,
}

impl FadeSettings {
    pub fn new(colors: Vec<Color>, fade_time: Duration) -> Self {
        Self {
            colors,
            saved: SavedFade::default(),
            fade_time: whole_millis(fade_time),
        }
    }

    pub fn fade_time(&self) -> Duration {
        self.fade_time
    }

    /// Truncates to whole milliseconds, saturating at [`MAX_FADE_TIME`].
    pub fn set_fade_time(&mut self, fade_time: Duration) {
        self.fade_time = whole_millis(fade_time);
    }

    /// Appends to the active palette and returns the new color's position.
    pub fn push_color(&mut self, color: Color) -> usize {
        self.colors.push(color);
        self.colors.len() - 1
    }

    pub fn remove_color(&mut self, index: usize) -> Option<Color> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            None
        }
    }

    pub fn save_as(&mut self, name: impl Into<String>) {
        self.saved = SavedFade {
            name: name.into(),
            colors: self.colors.clone(),
        };
    }

    pub fn restore_saved(&mut self) {
        self.colors.clone_from(&self.saved.colors);
    }
}

pub const MAX_FADE_TIME: Duration = Duration::from_millis(u32::MAX as u64);

fn whole_millis(duration: Duration) -> Duration {
    Duration::from_millis(duration.min(MAX_FADE_TIME).as_millis() as u64)
}

/// LED strip settings. Only the data of the selected mode exists; the flat
/// shape with every branch present is [`LedSettingsRecord`], which is what
/// goes over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "LedSettingsRecord", into = "LedSettingsRecord")]
pub enum LedSettings {
    #[default]
    Off,
    Static {
        color: Color,
    },
    Fade(FadeSettings),
}

impl LedSettings {
    pub fn mode(&self) -> LedMode {
        match self {
            LedSettings::Off => LedMode::Off,
            LedSettings::Static { .. } => LedMode::Static,
            LedSettings::Fade(_) => LedMode::Fade,
        }
    }

    pub fn fade(&self) -> Option<&FadeSettings> {
        match self {
            LedSettings::Fade(fade) => Some(fade),
            _ => None,
        }
    }

    pub fn fade_mut(&mut self) -> Option<&mut FadeSettings> {
        match self {
            LedSettings::Fade(fade) => Some(fade),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSettings {
    pub color: Color,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self { color: BLACK }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LedSettingsRecord {
    pub mode: LedMode,
    #[serde(rename = "static", default)]
    pub static_settings: StaticSettings,
    #[serde(default)]
    pub fade: FadeSettings,
}

impl From<LedSettingsRecord> for LedSettings {
    fn from(record: LedSettingsRecord) -> Self {
        match record.mode {
            LedMode::Off => LedSettings::Off,
            LedMode::Static => LedSettings::Static {
                color: record.static_settings.color,
            },
            LedMode::Fade => LedSettings::Fade(record.fade),
        }
    }
}

impl From<LedSettings> for LedSettingsRecord {
    fn from(settings: LedSettings) -> Self {
        let mode = settings.mode();
        match settings {
            LedSettings::Off => LedSettingsRecord::default(),
            LedSettings::Static { color } => LedSettingsRecord {
                mode,
                static_settings: StaticSettings { color },
                fade: Default::default(),
            },
            LedSettings::Fade(fade) => LedSettingsRecord {
                mode,
                static_settings: Default::default(),
                fade,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use strum::IntoEnumIterator;

    use crate::data::{
        color::{Color, BLUE, GREEN, RED},
        led::{FadeSettings, LedMode, LedSettings, LedSettingsRecord, MAX_FADE_TIME},
    };

    #[test]
    fn test_parse_static_example() {
        let json = r##"{"mode": "static", "static": {"color": "#ff0000"}, "fade": {"colors": [], "saved": {"name": "", "colors": []}, "fade_time": 0}}"##;
        let parsed: LedSettings = serde_json::from_str(json).unwrap();
        assert_eq!(LedSettings::Static { color: RED }, parsed);
    }

    #[test]
    fn test_mode_vocabulary() {
        let names: Vec<_> = LedMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(vec!["off", "static", "fade"], names);
        assert_eq!(Ok(LedMode::Fade), "fade".parse::<LedMode>());
        assert!("blink".parse::<LedMode>().is_err());
        assert!("Static".parse::<LedMode>().is_err());

        let unknown = r#"{"mode": "rainbow"}"#;
        assert!(serde_json::from_str::<LedSettings>(unknown).is_err());
    }

    #[test]
    fn test_inactive_branch_is_dropped() {
        let yaml = r##"
mode: fade
static:
  color: "#00ff00"
fade:
  colors: ["#ff0000", "#0000ff"]
  saved:
    name: warm
    colors: ["#ff8000"]
  fade_time: 1500
"##;
        let parsed: LedSettings = serde_yaml::from_str(yaml).unwrap();
        let fade = parsed.fade().expect("fade mode");
        assert_eq!(vec![RED, BLUE], fade.colors);
        assert_eq!("warm", fade.saved.name);
        assert_eq!(vec![Color::new(0xff, 0x80, 0)], fade.saved.colors);
        assert_eq!(Duration::from_millis(1500), fade.fade_time());

        let record = LedSettingsRecord::from(parsed);
        assert_eq!(LedMode::Fade, record.mode);
        assert_ne!(GREEN, record.static_settings.color);
    }

    #[test]
    fn test_missing_branches_default() {
        let parsed: LedSettings = serde_json::from_str(r#"{"mode": "off"}"#).unwrap();
        assert_eq!(LedSettings::Off, parsed);
        let parsed: LedSettings = serde_json::from_str(r#"{"mode": "fade"}"#).unwrap();
        assert_eq!(LedSettings::Fade(FadeSettings::default()), parsed);
    }

    #[test]
    fn test_roundtrip_keeps_active_branch() {
        let mut fade = FadeSettings::new(vec![RED, GREEN], Duration::from_millis(250));
        fade.save_as("primary");
        for settings in [
            LedSettings::Off,
            LedSettings::Static { color: BLUE },
            LedSettings::Fade(fade),
        ] {
            let json = serde_json::to_string(&settings).unwrap();
            let parsed: LedSettings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings, parsed, "{json}");
        }
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let value = serde_json::to_value(LedSettings::Static { color: RED }).unwrap();
        assert_eq!("static", value["mode"]);
        assert_eq!("#ff0000", value["static"]["color"]);
        assert_eq!(0, value["fade"]["fade_time"]);
        assert_eq!("", value["fade"]["saved"]["name"]);
    }

    #[test]
    fn test_saved_palette_is_independent() {
        let mut fade = FadeSettings::new(vec![RED], Duration::from_secs(2));
        fade.save_as("reds");
        assert_eq!(1, fade.push_color(GREEN));
        assert_eq!(vec![RED], fade.saved.colors);

        fade.saved.colors.push(BLUE);
        assert_eq!(vec![RED, GREEN], fade.colors);

        assert_eq!(Some(RED), fade.remove_color(0));
        assert_eq!(None, fade.remove_color(5));
        fade.restore_saved();
        assert_eq!(vec![RED, BLUE], fade.colors);
    }

    #[test]
    fn test_fade_time_boundaries_roundtrip() {
        for (fade_time, expected) in [
            (Duration::ZERO, Duration::ZERO),
            (
                Duration::new(12_345_678, 123_456_789),
                Duration::new(12_345_678, 123_000_000),
            ),
            (MAX_FADE_TIME, MAX_FADE_TIME),
            (Duration::from_secs(u64::MAX), MAX_FADE_TIME),
            (Duration::MAX, MAX_FADE_TIME),
        ] {
            let settings = LedSettings::Fade(FadeSettings::new(vec![RED], fade_time));
            assert_eq!(
                Some(expected),
                settings.fade().map(FadeSettings::fade_time)
            );
            let json = serde_json::to_string(&settings).unwrap();
            let parsed: LedSettings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings, parsed, "{json}");
        }
    }

    #[test]
    fn test_fade_time_is_integer_millis() {
        let parsed: FadeSettings = serde_json::from_str(r#"{"fade_time": 500}"#).unwrap();
        assert_eq!(Duration::from_millis(500), parsed.fade_time());
        assert!(parsed.colors.is_empty());
        assert!(serde_json::from_str::<FadeSettings>(r#"{"fade_time": 0.5}"#).is_err());
        assert!(serde_json::from_str::<FadeSettings>(r#"{"fade_time": -1}"#).is_err());

        let mut fade = FadeSettings::default();
        fade.set_fade_time(Duration::from_micros(2_500));
        assert_eq!(Duration::from_millis(2), fade.fade_time());
    }
}
