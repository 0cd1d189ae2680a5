pub mod midi;

use midi::Midi;

use serde::{de, Deserialize, Deserializer};
use std::fs;
use std::path::Path;

use crate::{Discipline, Result, SchedulingContext};
use anyhow::Context;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub midi: Midi,
    #[serde(default)]
    pub playback: Playback,
    #[serde(default)]
    pub scheduling: Scheduling,
}

#[derive(Debug, Deserialize)]
pub struct Playback {
    /// Seconds of silence before the first event.
    #[serde(
        default = "default_start_delay",
        deserialize_with = "deserialize_start_delay"
    )]
    pub start_delay: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Scheduling {
    #[serde(default)]
    pub discipline: Option<Discipline>,
}

fn default_start_delay() -> f64 {
    0.1
}

fn deserialize_start_delay<'de, TDeserializer>(
    deserializer: TDeserializer,
) -> std::result::Result<f64, TDeserializer::Error>
where
    TDeserializer: Deserializer<'de>,
{
    let seconds: f64 = Deserialize::deserialize(deserializer)?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(de::Error::custom(format!(
            "start delay must be a finite number of seconds, got {}",
            seconds
        )));
    }

    Ok(seconds)
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            start_delay: default_start_delay(),
        }
    }
}

impl Config {
    pub fn from(yaml: &str) -> Result<Config> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        Self::from(&yaml).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn scheduling_context(&self) -> SchedulingContext {
        SchedulingContext {
            discipline: self.scheduling.discipline,
            ..SchedulingContext::default()
        }
    }
}
