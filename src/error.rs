use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("invalid root note format: '{0}'")]
    InvalidRootFormat(String),
    #[error("unsupported chord quality: '{0}'")]
    UnsupportedChordQuality(String),
    #[error("invalid duration: '{0}'")]
    InvalidDuration(String),
    #[error("invalid tempo: '{0}'")]
    InvalidTempo(String),
    #[error("malformed command line: '{0}'")]
    MalformedCommandLine(String),
    #[error("program mixes chord and note commands; cannot pick a scheduling model")]
    AmbiguousSchedulingModel,
    #[error("program produced no events to schedule")]
    NothingToSchedule,
}

/// A recovered failure, tied to the source line it came from when known.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub error: ScriptError,
}

impl Diagnostic {
    pub fn new(line: Option<usize>, error: ScriptError) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// A whole-run failure. Carries every diagnostic gathered before the run was given up.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{error}")]
pub struct Rejected {
    pub error: ScriptError,
    pub diagnostics: Vec<Diagnostic>,
}
