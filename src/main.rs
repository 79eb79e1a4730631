use std::{env, error::Error};

use env_logger::{Env, TimestampPrecision};
use log::{info, warn};

use ccs_settings::{
    format::{encode, OutputFormat},
    settings::CONFIG,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .parse_env(Env::default().filter_or("LOG_LEVEL", "info"))
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let format = match env::args().nth(1) {
        Some(arg) => arg.parse::<OutputFormat>().unwrap_or_else(|error| {
            warn!("Ignoring output format {arg}: {error}");
            CONFIG.output()
        }),
        None => CONFIG.output(),
    };
    let defaults = &CONFIG.defaults;
    info!(
        "Loaded defaults: LED {}, LCD {} ({})",
        defaults.led.mode(),
        defaults.lcd.mode,
        defaults.lcd.color
    );
    println!("{}", encode(defaults, format)?);
    Ok(())
}
