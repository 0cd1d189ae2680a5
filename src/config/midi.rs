use serde::{de, Deserialize, Deserializer};
use std::convert::TryFrom;
use wmidi::{Channel, Velocity, U7};

#[derive(Debug, Deserialize)]
pub struct Midi {
    /// Output port name. A virtual port is opened instead when unset.
    #[serde(default)]
    pub port: Option<String>,
    #[serde(
        default = "default_lead_channel",
        deserialize_with = "deserialize_channel"
    )]
    pub lead_channel: Channel,
    #[serde(
        default = "default_bass_channel",
        deserialize_with = "deserialize_channel"
    )]
    pub bass_channel: Channel,
    #[serde(default = "default_velocity", deserialize_with = "deserialize_velocity")]
    pub velocity: Velocity,
}

const VELOCITY: u8 = 100;

fn default_lead_channel() -> Channel {
    Channel::Ch1
}

fn default_bass_channel() -> Channel {
    Channel::Ch2
}

fn default_velocity() -> Velocity {
    Velocity::from_u8_lossy(VELOCITY)
}

impl Default for Midi {
    fn default() -> Self {
        Self {
            port: None,
            lead_channel: default_lead_channel(),
            bass_channel: default_bass_channel(),
            velocity: default_velocity(),
        }
    }
}

/// Channels are written 1-16 in config files.
fn deserialize_channel<'de, TDeserializer>(
    deserializer: TDeserializer,
) -> std::result::Result<Channel, TDeserializer::Error>
where
    TDeserializer: Deserializer<'de>,
{
    let channel_number: u8 = Deserialize::deserialize(deserializer)?;
    channel_number
        .checked_sub(1)
        .and_then(|index| Channel::from_index(index).ok())
        .ok_or_else(|| {
            de::Error::custom(format!(
                "MIDI channel must be between 1 and 16, got {}",
                channel_number
            ))
        })
}

fn deserialize_velocity<'de, TDeserializer>(
    deserializer: TDeserializer,
) -> std::result::Result<Velocity, TDeserializer::Error>
where
    TDeserializer: Deserializer<'de>,
{
    let value: u8 = Deserialize::deserialize(deserializer)?;
    U7::try_from(value).map_err(|_| {
        de::Error::custom(format!(
            "MIDI velocity must be between 0 and 127, got {}",
            value
        ))
    })
}
