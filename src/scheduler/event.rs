use crate::Pitch;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ChordOn,
    NoteOn,
    Rest,
}

/// Which instrument should sound an event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Lead,
    Bass,
}

/// A playback instruction with absolute timing, in seconds from program start.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimedEvent {
    pub kind: EventKind,
    pub voice: Voice,
    pub pitches: Vec<Pitch>,
    pub start_offset: f64,
    pub duration: f64,
}

impl TimedEvent {
    pub fn chord(pitches: Vec<Pitch>, start_offset: f64, duration: f64) -> Self {
        Self {
            kind: EventKind::ChordOn,
            voice: Voice::Lead,
            pitches,
            start_offset,
            duration,
        }
    }

    pub fn note(voice: Voice, pitch: Pitch, start_offset: f64, duration: f64) -> Self {
        Self {
            kind: EventKind::NoteOn,
            voice,
            pitches: vec![pitch],
            start_offset,
            duration,
        }
    }

    pub fn rest(start_offset: f64, duration: f64) -> Self {
        Self {
            kind: EventKind::Rest,
            voice: Voice::Lead,
            pitches: vec![],
            start_offset,
            duration,
        }
    }

    pub fn end_offset(&self) -> f64 {
        self.start_offset + self.duration
    }

    pub fn is_audible(&self) -> bool {
        !self.pitches.is_empty()
    }
}
