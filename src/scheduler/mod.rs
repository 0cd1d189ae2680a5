mod bassline;
mod cursor;
mod event;

pub use bassline::bass_note;
pub use cursor::ScheduleCursor;
pub use event::{EventKind, TimedEvent, Voice};

use crate::{
    Chord, ChordQuality, Command, Diagnostic, Duration, Pitch, Program, Rejected, ScriptError, Tempo,
};
use log::*;
use serde::{Deserialize, Serialize};

/// How the cursor moves between commands.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    /// One chord or rest per measure, whatever its own length.
    MeasureAligned,
    /// Each note or rest starts where the previous one ended.
    Sequential,
}

/// Caller-owned state for one scheduling run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchedulingContext {
    pub tempo: Tempo,
    /// Forces a discipline instead of inferring it from the program.
    pub discipline: Option<Discipline>,
}

impl SchedulingContext {
    pub fn with_discipline(discipline: Discipline) -> Self {
        Self {
            discipline: Some(discipline),
            ..Self::default()
        }
    }
}

impl Default for SchedulingContext {
    fn default() -> Self {
        Self {
            tempo: Tempo::default(),
            discipline: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schedule {
    pub discipline: Discipline,
    pub events: Vec<TimedEvent>,
    /// Cursor position after the last command: the length of the program.
    pub final_cursor: f64,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Schedule {
    /// When the last event stops sounding, which may be past `final_cursor`.
    pub fn sounding_end(&self) -> f64 {
        self.events
            .iter()
            .map(TimedEvent::end_offset)
            .fold(self.final_cursor, f64::max)
    }
}

/// Turns a program into absolute-time events.
///
/// Commands that fail to resolve are reported as diagnostics and contribute no events. The run
/// as a whole is rejected if the program mixes chords and notes, or if nothing is left to play.
pub fn schedule(program: &Program, context: &SchedulingContext) -> Result<Schedule, Rejected> {
    let discipline = choose_discipline(program, context.discipline).map_err(|error| Rejected {
        error,
        diagnostics: vec![],
    })?;
    debug!("Scheduling {} commands, {:?}", program.len(), discipline);

    let mut tempo = context.tempo;
    let mut cursor = ScheduleCursor::default();
    let mut events = vec![];
    let mut diagnostics = vec![];

    for statement in &program.statements {
        let start_offset = cursor.offset();

        let placed = match &statement.command {
            Command::SetTempo { tempo: new_tempo } => {
                debug!("Tempo set to {}", new_tempo);
                tempo = *new_tempo;
                continue;
            }
            Command::Chord {
                root,
                quality,
                duration,
            } => chord_events(root, quality, duration, tempo, start_offset),
            Command::Note { pitch, duration } => note_event(pitch, duration, tempo, start_offset),
            Command::Rest { duration } => duration
                .resolve_seconds(tempo)
                .map(|seconds| vec![TimedEvent::rest(start_offset, seconds)]),
        };

        match placed {
            Ok(mut placed) => {
                for event in &placed {
                    debug!(
                        "{:?} {:?} at {:.3}s for {:.3}s",
                        event.kind, event.pitches, event.start_offset, event.duration
                    );
                }
                events.append(&mut placed);
            }
            Err(error) => {
                debug!("Dropping '{}': {}", statement.command, error);
                diagnostics.push(Diagnostic::new(statement.line, error));
            }
        }

        match discipline {
            Discipline::MeasureAligned => cursor.advance_measure(tempo),
            Discipline::Sequential => {
                if let Some(seconds) = command_step(&statement.command)
                    .and_then(|duration| duration.resolve_seconds(tempo).ok())
                {
                    cursor.advance(seconds);
                }
            }
        }
    }

    if events.is_empty() {
        return Err(Rejected {
            error: ScriptError::NothingToSchedule,
            diagnostics,
        });
    }

    info!(
        "Scheduled {} events over {:.3}s",
        events.len(),
        cursor.offset()
    );

    Ok(Schedule {
        discipline,
        events,
        final_cursor: cursor.offset(),
        diagnostics,
    })
}

fn choose_discipline(
    program: &Program,
    forced: Option<Discipline>,
) -> Result<Discipline, ScriptError> {
    let has_chords = program
        .commands()
        .any(|command| matches!(command, Command::Chord { .. }));
    let has_notes = program
        .commands()
        .any(|command| matches!(command, Command::Note { .. }));

    match (forced, has_chords, has_notes) {
        (_, true, true) => Err(ScriptError::AmbiguousSchedulingModel),
        (Some(Discipline::Sequential), true, _) => Err(ScriptError::AmbiguousSchedulingModel),
        (Some(Discipline::MeasureAligned), _, true) => Err(ScriptError::AmbiguousSchedulingModel),
        (Some(discipline), _, _) => Ok(discipline),
        (None, true, false) => Ok(Discipline::MeasureAligned),
        (None, false, _) => Ok(Discipline::Sequential),
    }
}

/// The written duration of a command that occupies time.
fn command_step(command: &Command) -> Option<&Duration> {
    match command {
        Command::SetTempo { .. } => None,
        Command::Chord { duration, .. }
        | Command::Note { duration, .. }
        | Command::Rest { duration } => Some(duration),
    }
}

fn chord_events(
    root: &str,
    quality: &str,
    duration: &Duration,
    tempo: Tempo,
    start_offset: f64,
) -> Result<Vec<TimedEvent>, ScriptError> {
    let quality = ChordQuality::parse(quality)?;
    let root = Pitch::parse(root)?;
    let seconds = duration.resolve_seconds(tempo)?;
    let chord = Chord::new(root, quality);

    let mut events = vec![TimedEvent::chord(chord.pitches(), start_offset, seconds)];

    if let Some(bass) = bass_note(root, quality) {
        let bass_seconds = Duration::whole_note().resolve_seconds(tempo)?;
        events.push(TimedEvent::note(
            Voice::Bass,
            bass,
            start_offset,
            bass_seconds,
        ));
    }

    Ok(events)
}

fn note_event(
    pitch: &str,
    duration: &Duration,
    tempo: Tempo,
    start_offset: f64,
) -> Result<Vec<TimedEvent>, ScriptError> {
    let seconds = duration.resolve_seconds(tempo)?;
    let pitch = Pitch::parse(pitch)?;

    Ok(vec![TimedEvent::note(
        Voice::Lead,
        pitch,
        start_offset,
        seconds,
    )])
}
