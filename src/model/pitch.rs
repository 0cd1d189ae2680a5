use crate::{Letter, Modifier, ScriptError};
use combine::{eof, optional, parser::char::digit, token, Parser, Stream};
use serde::{Serialize, Serializer};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// The twelve equal-tempered pitch classes, spelled with sharps.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum PitchClass {
    C,
    #[strum(serialize = "C#")]
    CSharp,
    D,
    #[strum(serialize = "D#")]
    DSharp,
    E,
    F,
    #[strum(serialize = "F#")]
    FSharp,
    G,
    #[strum(serialize = "G#")]
    GSharp,
    A,
    #[strum(serialize = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Wraps any integer onto the cyclic C..B ordering.
    pub fn from_index(index: i32) -> Self {
        let wrapped = index.rem_euclid(SEMITONES_PER_OCTAVE) as usize;
        Self::iter()
            .nth(wrapped)
            .unwrap_or(PitchClass::C)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: i32,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: i32) -> Self {
        Self { class, octave }
    }

    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        let octave_parser = (optional(token('-')), digit()).map(|(negative, digit): (_, char)| {
            (digit as i32 - '0' as i32) * negative.map_or(1, |_| -1)
        });

        (Letter::parser(), Modifier::parser(), octave_parser).map(
            |(letter, modifier, octave): (Letter, Modifier, i32)| {
                Pitch::new(PitchClass::from_index(letter.semitone()), octave)
                    .transpose(modifier.offset())
            },
        )
    }

    /// Parses a whole `<pitch class><octave>` token such as `A2`, `C#4` or `Bb3`.
    pub fn parse(token: &str) -> Result<Self, ScriptError> {
        (Self::parser::<&str>(), eof())
            .parse(token)
            .map(|((pitch, _), _)| pitch)
            .map_err(|_| ScriptError::InvalidRootFormat(token.to_string()))
    }

    /// Moves by `semitones` (negative goes down), carrying across the B/C boundary.
    pub fn transpose(self, semitones: i32) -> Self {
        let position = self.class.index() + semitones;

        Self::new(
            PitchClass::from_index(position),
            self.octave + position.div_euclid(SEMITONES_PER_OCTAVE),
        )
    }

    /// MIDI note number, with C4 = 60.
    pub fn midi_number(self) -> i32 {
        (self.octave + 1) * SEMITONES_PER_OCTAVE + self.class.index()
    }

    pub fn all_in_octave(octave: i32) -> impl Iterator<Item = Pitch> {
        PitchClass::iter().map(move |class| Pitch::new(class, octave))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
