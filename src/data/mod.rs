use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::data::{
    color::Color,
    lcd::{LcdMode, LcdSettings},
    led::LedSettings,
};

pub mod color;
pub mod lcd;
pub mod led;

/// Settings chosen by the user, one section per peripheral.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub led: LedSettings,
    #[serde(default)]
    pub lcd: LcdSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingUpdate {
    Led(LedSettings),
    /// Recolors the LED; only applies while it is in static mode.
    LedStaticColor(Color),
    Lcd(LcdSettings),
    LcdMode(LcdMode),
    LcdColor(Color),
}

impl UserSettings {
    /// Applies `msg` and returns `true` if a value actually changed.
    pub fn process_msg(&mut self, msg: SettingUpdate) -> bool {
        match msg {
            SettingUpdate::Led(led) => {
                if self.led == led {
                    return false;
                }
                info!("Setting 'LED' to '{}': {led:?}", led.mode());
                self.led = led;
            }
            SettingUpdate::LedStaticColor(new_color) => match &mut self.led {
                LedSettings::Static { color } => {
                    if *color == new_color {
                        return false;
                    }
                    info!("Setting 'LED static color' to '{new_color}'");
                    *color = new_color;
                }
                other => {
                    warn!(
                        "Ignoring LED static color {new_color} in mode '{}'",
                        other.mode()
                    );
                    return false;
                }
            },
            SettingUpdate::Lcd(lcd) => {
                if self.lcd == lcd {
                    return false;
                }
                info!("Setting 'LCD' to '{}' with color {}", lcd.mode, lcd.color);
                self.lcd = lcd;
            }
            SettingUpdate::LcdMode(mode) => {
                if self.lcd.mode == mode {
                    return false;
                }
                info!("Setting 'LCD mode' to '{mode}'");
                self.lcd.mode = mode;
            }
            SettingUpdate::LcdColor(color) => {
                if self.lcd.color == color {
                    return false;
                }
                info!("Setting 'LCD color' to '{color}'");
                self.lcd.color = color;
            }
        }
        true
    }
}
