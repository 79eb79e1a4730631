use ron::{error::SpannedError, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::data::UserSettings;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Ron,
}

pub fn encode(settings: &UserSettings, format: OutputFormat) -> Result<String, FormatError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(settings).map_err(FormatError::Json)?,
        OutputFormat::Yaml => serde_yaml::to_string(settings).map_err(FormatError::Yaml)?,
        OutputFormat::Ron => ron::ser::to_string_pretty(settings, PrettyConfig::default())
            .map_err(FormatError::RonSerialize)?,
    })
}

pub fn decode(content: &str, format: OutputFormat) -> Result<UserSettings, FormatError> {
    Ok(match format {
        OutputFormat::Json => serde_json::from_str(content).map_err(FormatError::Json)?,
        OutputFormat::Yaml => serde_yaml::from_str(content).map_err(FormatError::Yaml)?,
        OutputFormat::Ron => ron::from_str(content).map_err(FormatError::RonDeserialize)?,
    })
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Cannot process json: {0}")]
    Json(serde_json::Error),
    #[error("Cannot process yaml: {0}")]
    Yaml(serde_yaml::Error),
    #[error("Cannot serialize ron: {0}")]
    RonSerialize(ron::Error),
    #[error("Cannot deserialize ron: {0}")]
    RonDeserialize(SpannedError),
}
