use crate::{Duration, Tempo};
use std::fmt;

/// One parsed program line.
///
/// Pitch, quality and duration keep their source tokens; they are resolved when the program is
/// scheduled, so a bad chord quality surfaces there rather than while parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    SetTempo {
        tempo: Tempo,
    },
    Chord {
        root: String,
        quality: String,
        duration: Duration,
    },
    Note {
        pitch: String,
        duration: Duration,
    },
    Rest {
        duration: Duration,
    },
}

impl Command {
    pub fn chord(root: &str, quality: &str, duration: &str) -> Self {
        Command::Chord {
            root: root.to_string(),
            quality: quality.to_string(),
            duration: Duration::new(duration),
        }
    }

    pub fn note(pitch: &str, duration: &str) -> Self {
        Command::Note {
            pitch: pitch.to_string(),
            duration: Duration::new(duration),
        }
    }

    pub fn rest(duration: &str) -> Self {
        Command::Rest {
            duration: Duration::new(duration),
        }
    }

    pub fn set_tempo(tempo: Tempo) -> Self {
        Command::SetTempo { tempo }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetTempo { tempo } => write!(f, "setTempo {}", tempo.bpm()),
            Command::Chord {
                root,
                quality,
                duration,
            } => write!(f, "chord {} {} {}", root, quality, duration),
            Command::Note { pitch, duration } => write!(f, "play {} {}", pitch, duration),
            Command::Rest { duration } => write!(f, "rest {}", duration),
        }
    }
}
