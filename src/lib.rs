mod compile;
pub mod config;
mod error;
pub mod midi;
mod model;
mod result;
mod scheduler;
pub mod sink;

pub use compile::compile;
pub use config::Config;
pub use error::{Diagnostic, Rejected, ScriptError};
pub use model::{
    chord::{resolve_chord, Chord},
    command::Command,
    duration::{Duration, NoteValue},
    letter::Letter,
    modifier::Modifier,
    pitch::{Pitch, PitchClass},
    program::{parse_program, Program, Statement},
    quality::ChordQuality,
    tempo::{Tempo, BEATS_PER_MEASURE},
};
pub use result::Result;
pub use scheduler::{
    bass_note, schedule, Discipline, EventKind, Schedule, ScheduleCursor, SchedulingContext,
    TimedEvent, Voice,
};
