use super::{
    cue::{cues, Action},
    MidiMessageSender, PlaybackSink,
};
use crate::{config::Config, midi, Result, Schedule, Voice};
use log::*;
use std::time::{Duration, Instant};
use wmidi::Note;

/// Plays a schedule on a MIDI output port, timing each message against the wall clock.
pub struct MidiSink {
    sender: MidiMessageSender,
    start_delay: f64,
    sounding: Vec<(Voice, Note)>,
}

impl MidiSink {
    pub fn new(sender: MidiMessageSender, start_delay: f64) -> Self {
        Self {
            sender,
            start_delay: usable_delay(start_delay),
            sounding: vec![],
        }
    }

    pub fn connect(config: &Config) -> Result<Self> {
        let output = midi::connect_output(config.midi.port.as_deref())?;

        Ok(Self::new(
            MidiMessageSender::new(output, &config.midi),
            config.playback.start_delay,
        ))
    }

    /// Silences every note still sounding.
    pub fn release_all(&mut self) -> Result<()> {
        while let Some((voice, note)) = self.sounding.pop() {
            self.sender.fire_note_off(voice, note)?;
        }

        Ok(())
    }

    fn perform(&mut self, schedule: &Schedule) -> Result<()> {
        let cues = cues(schedule)?;
        let start = Instant::now() + Duration::from_secs_f64(self.start_delay);

        for cue in cues {
            let due = start + Duration::from_secs_f64(cue.at);
            spin_sleep::sleep(due.saturating_duration_since(Instant::now()));

            match cue.action {
                Action::NoteOn => {
                    trace!("Note on {:?} {:?} at {:.3}s", cue.voice, cue.note, cue.at);
                    self.sender.fire_note_on(cue.voice, cue.note)?;
                    self.sounding.push((cue.voice, cue.note));
                }
                Action::NoteOff => {
                    trace!("Note off {:?} {:?} at {:.3}s", cue.voice, cue.note, cue.at);
                    self.sender.fire_note_off(cue.voice, cue.note)?;
                    if let Some(index) = self
                        .sounding
                        .iter()
                        .position(|&sounding| sounding == (cue.voice, cue.note))
                    {
                        self.sounding.swap_remove(index);
                    }
                }
            }
        }

        Ok(())
    }
}

/// `Duration::from_secs_f64` panics on negative or non-finite input.
fn usable_delay(seconds: f64) -> f64 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    }
}

impl PlaybackSink for MidiSink {
    fn play(&mut self, schedule: &Schedule) -> Result<()> {
        info!(
            "Playing {} events, {:.3}s",
            schedule.events.len(),
            schedule.sounding_end()
        );

        let result = self.perform(schedule);
        if result.is_err() {
            if let Err(err) = self.release_all() {
                warn!("Could not release sounding notes: {}", err);
            }
        }

        result
    }
}

impl Drop for MidiSink {
    fn drop(&mut self) {
        if let Err(err) = self.release_all() {
            warn!("Could not release sounding notes: {}", err);
        }
    }
}
