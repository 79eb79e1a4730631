use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::{data::UserSettings, format::OutputFormat};

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct AppSettings {
    /// Settings a fresh installation starts with.
    #[serde(default)]
    pub defaults: UserSettings,
    #[serde(default)]
    output: Option<OutputFormat>,
}

impl AppSettings {
    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

pub fn create_settings_from(builder: ConfigBuilder<DefaultState>) -> Result<AppSettings, ConfigError> {
    builder.build()?.try_deserialize()
}

fn create_settings() -> Result<AppSettings, ConfigError> {
    create_settings_from(
        Config::builder()
            .add_source(File::with_name("config.yaml").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("-")
                    .prefix_separator("_"),
            ),
    )
}

lazy_static! {
    pub static ref CONFIG: AppSettings = create_settings().expect("Cannot load config.yaml");
}
