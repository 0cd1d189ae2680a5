use crate::{config::midi::Midi, Result, Voice};
use anyhow::anyhow;
use midir::MidiOutputConnection;
use wmidi::{Channel, MidiMessage, Note, Velocity};

pub struct MidiMessageSender {
    output: MidiOutputConnection,
    lead_channel: Channel,
    bass_channel: Channel,
    velocity: Velocity,
}

impl MidiMessageSender {
    pub fn new(output: MidiOutputConnection, midi: &Midi) -> Self {
        Self {
            output,
            lead_channel: midi.lead_channel,
            bass_channel: midi.bass_channel,
            velocity: midi.velocity,
        }
    }

    pub fn fire_note_on(&mut self, voice: Voice, note: Note) -> Result<()> {
        self.send_midi_message(MidiMessage::NoteOn(
            self.channel(voice),
            note,
            self.velocity,
        ))
    }

    pub fn fire_note_off(&mut self, voice: Voice, note: Note) -> Result<()> {
        self.send_midi_message(MidiMessage::NoteOff(
            self.channel(voice),
            note,
            self.velocity,
        ))
    }

    fn channel(&self, voice: Voice) -> Channel {
        match voice {
            Voice::Lead => self.lead_channel,
            Voice::Bass => self.bass_channel,
        }
    }

    fn send_midi_message(&mut self, midi_message: MidiMessage) -> Result<()> {
        let mut bytes_buffer = vec![0; midi_message.bytes_size()];
        midi_message
            .copy_to_slice(&mut bytes_buffer)
            .map_err(|err| anyhow!("Could not encode MIDI message: {:?}", err))?;
        self.output.send(&bytes_buffer)?;

        Ok(())
    }
}
