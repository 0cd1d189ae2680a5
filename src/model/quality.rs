use crate::ScriptError;
use combine::{attempt, choice, eof, parser::char::string, Parser, Stream};
use strum_macros::{Display, EnumIter};
use ChordQuality::*;

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum ChordQuality {
    #[strum(serialize = "major")]
    Major,
    #[strum(serialize = "minor")]
    Minor,
    #[strum(serialize = "diminished")]
    Diminished,
    #[strum(serialize = "augmented")]
    Augmented,
}

impl ChordQuality {
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        choice((
            attempt(string("major").map(|_| Major)),
            attempt(string("minor").map(|_| Minor)),
            attempt(string("diminished").map(|_| Diminished)),
            attempt(string("augmented").map(|_| Augmented)),
        ))
    }

    pub fn parse(name: &str) -> Result<Self, ScriptError> {
        (Self::parser::<&str>(), eof())
            .parse(name)
            .map(|((quality, _), _)| quality)
            .map_err(|_| ScriptError::UnsupportedChordQuality(name.to_string()))
    }

    /// Semitones above the root, in voicing order.
    pub fn offsets(self) -> &'static [i32] {
        match self {
            Major => &[0, 4, 7],
            Minor => &[0, 3, 7],
            Diminished => &[0, 3, 6],
            Augmented => &[0, 4, 8],
        }
    }
}
