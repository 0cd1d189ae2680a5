use crate::Result;
use anyhow::anyhow;
use log::*;
use midir::{MidiOutput, MidiOutputConnection, MidiOutputPort};

const CLIENT_NAME: &str = "Chord runner";

/// Opens the named output port, or a virtual port named after the client when `port_name` is
/// `None`.
pub fn connect_output(port_name: Option<&str>) -> Result<MidiOutputConnection> {
    match port_name {
        Some(port_name) => {
            let midi_output = midi_output()?;
            let port = port(&midi_output, port_name)?;

            info!("MIDI output: {}", port_name);

            midi_output
                .connect(&port, CLIENT_NAME)
                .map_err(|err| anyhow!("Could not connect to MIDI port '{}': {}", port_name, err))
        }
        None => connect_virtual(),
    }
}

#[cfg(unix)]
fn connect_virtual() -> Result<MidiOutputConnection> {
    use midir::os::unix::VirtualOutput;

    info!("MIDI output: virtual port '{}'", CLIENT_NAME);

    midi_output()?
        .create_virtual(CLIENT_NAME)
        .map_err(|err| anyhow!("Could not create virtual MIDI port: {}", err))
}

#[cfg(not(unix))]
fn connect_virtual() -> Result<MidiOutputConnection> {
    Err(anyhow!(
        "Virtual MIDI ports are not supported here; set midi.port in the config. Available ports are:\n{}",
        port_names(&midi_output()?)?.join("\n")
    ))
}

fn midi_output() -> Result<MidiOutput> {
    Ok(MidiOutput::new(CLIENT_NAME)?)
}

fn port_names(midi_output: &MidiOutput) -> Result<Vec<String>> {
    midi_output
        .ports()
        .iter()
        .map(|port| midi_output.port_name(port).map_err(|err| err.into()))
        .collect()
}

fn port(midi_output: &MidiOutput, name: &str) -> Result<MidiOutputPort> {
    let names = port_names(midi_output)?;

    midi_output
        .ports()
        .into_iter()
        .find(|port| midi_output.port_name(port).map_or(false, |port_name| port_name == name))
        .ok_or_else(|| {
            anyhow!(
                "Could not find a MIDI port with name '{}'. Available ports are:\n{}",
                name,
                names.join("\n")
            )
        })
}
