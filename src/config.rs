use serde::Deserialize;

use crate::error::Result;

pub const BASE_CONFIG_FILE: &str = "/etc/mdns-zoned/config.yaml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// The hostname this daemon defends on the link, e.g. `"myhost.local"`.
    pub hostname: String,

    #[serde(default)]
    pub log: LogConfig,

    /// Override for `ZONE_MAX`; `None` means the spec's defensive cap.
    #[serde(default)]
    pub zone_max: Option<usize>,
}

impl TryFrom<&[u8]> for Config {
    type Error = crate::error::Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Ok(serde_yaml::from_slice(value)?)
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LogConfig {
    #[serde(deserialize_with = "de_level_filter", default = "default_level")]
    pub level: log::LevelFilter,
    #[serde(default)]
    pub probe_trace: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            probe_trace: false,
        }
    }
}

fn default_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

fn de_level_filter<'de, D>(deserializer: D) -> std::result::Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: LevelFilter = Deserialize::deserialize(deserializer)?;
    Ok(match s {
        LevelFilter::Off => log::LevelFilter::Off,
        LevelFilter::Error => log::LevelFilter::Error,
        LevelFilter::Warn => log::LevelFilter::Warn,
        LevelFilter::Info => log::LevelFilter::Info,
        LevelFilter::Debug => log::LevelFilter::Debug,
        LevelFilter::Trace => log::LevelFilter::Trace,
    })
}

#[derive(Deserialize)]
enum LevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
