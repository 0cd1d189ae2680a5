use crate::{Pitch, Result, Schedule, Voice};
use anyhow::anyhow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use wmidi::Note;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    NoteOff,
    NoteOn,
}

/// A single MIDI note action at an offset in seconds from the start of playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub at: f64,
    pub action: Action,
    pub voice: Voice,
    pub note: Note,
}

/// Expands every audible event into a note-on and a note-off, in playing order.
///
/// At equal offsets note-offs come first, so a note repeated back to back is re-struck rather
/// than cut short.
pub fn cues(schedule: &Schedule) -> Result<Vec<Cue>> {
    let mut cues = vec![];

    for event in schedule.events.iter().filter(|event| event.is_audible()) {
        for &pitch in &event.pitches {
            let note = to_note(pitch)?;
            cues.push(Cue {
                at: event.start_offset,
                action: Action::NoteOn,
                voice: event.voice,
                note,
            });
            cues.push(Cue {
                at: event.end_offset(),
                action: Action::NoteOff,
                voice: event.voice,
                note,
            });
        }
    }

    cues.sort_by(|a, b| {
        a.at.partial_cmp(&b.at)
            .unwrap_or(Ordering::Equal)
            .then_with(|| action_rank(a.action).cmp(&action_rank(b.action)))
    });

    Ok(cues)
}

fn action_rank(action: Action) -> u8 {
    match action {
        Action::NoteOff => 0,
        Action::NoteOn => 1,
    }
}

pub fn to_note(pitch: Pitch) -> Result<Note> {
    u8::try_from(pitch.midi_number())
        .ok()
        .filter(|&number| number <= 127)
        .map(Note::from_u8_lossy)
        .ok_or_else(|| anyhow!("{} is outside the MIDI note range", pitch))
}
