use crate::{ScriptError, Tempo, BEATS_PER_MEASURE};
use combine::{
    choice, eof,
    error::StreamError,
    many1, optional,
    parser::char::digit,
    stream::StreamErrorFor,
    token, Parser, Stream,
};
use std::fmt;

/// A note length as written in the program, e.g. `1m`, `4n`, `8n.` or `1/4`.
///
/// The token is kept verbatim and only interpreted once a tempo is known.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Duration(String);

/// A parsed note length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoteValue {
    /// `<n>m`
    Measures(u32),
    /// `<d>n`, optionally dotted: one `d`th of a whole note.
    Division { denominator: u32, dotted: bool },
    /// `<a>/<b>` of a whole note.
    Fraction { numerator: u32, denominator: u32 },
}

impl NoteValue {
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        let measures_parser = token('m').map(|_| Suffix::Measures);
        let division_parser = (token('n'), optional(token('.')))
            .map(|(_, dot): (_, Option<char>)| Suffix::Division { dotted: dot.is_some() });
        let fraction_parser = (token('/'), number()).map(|(_, denominator)| Suffix::Over(denominator));

        (
            number(),
            choice((measures_parser, division_parser, fraction_parser)),
        )
            .map(|(count, suffix)| match suffix {
                Suffix::Measures => NoteValue::Measures(count),
                Suffix::Division { dotted } => NoteValue::Division {
                    denominator: count,
                    dotted,
                },
                Suffix::Over(denominator) => NoteValue::Fraction {
                    numerator: count,
                    denominator,
                },
            })
    }

    /// Length as a fraction of a whole note (one measure).
    pub fn whole_notes(self) -> f64 {
        match self {
            NoteValue::Measures(count) => f64::from(count),
            NoteValue::Division {
                denominator,
                dotted,
            } => {
                let base = 1.0 / f64::from(denominator);
                if dotted {
                    base * 1.5
                } else {
                    base
                }
            }
            NoteValue::Fraction {
                numerator,
                denominator,
            } => f64::from(numerator) / f64::from(denominator),
        }
    }

    fn is_positive(self) -> bool {
        match self {
            NoteValue::Measures(count) => count > 0,
            NoteValue::Division { denominator, .. } => denominator > 0,
            NoteValue::Fraction {
                numerator,
                denominator,
            } => numerator > 0 && denominator > 0,
        }
    }
}

enum Suffix {
    Measures,
    Division { dotted: bool },
    Over(u32),
}

fn number<Input>() -> impl Parser<Input, Output = u32>
where
    Input: Stream<Token = char>,
{
    many1(digit()).and_then(|digits: String| {
        digits
            .parse::<u32>()
            .map_err(StreamErrorFor::<Input>::other)
    })
}

impl Duration {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn measure() -> Self {
        Self::new("1m")
    }

    pub fn whole_note() -> Self {
        Self::new("1n")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> Result<NoteValue, ScriptError> {
        (NoteValue::parser::<&str>(), eof())
            .parse(self.0.as_str())
            .ok()
            .map(|((value, _), _)| value)
            .filter(|value| value.is_positive())
            .ok_or_else(|| ScriptError::InvalidDuration(self.0.clone()))
    }

    pub fn resolve_seconds(&self, tempo: Tempo) -> Result<f64, ScriptError> {
        let value = self.value()?;

        Ok(value.whole_notes() * f64::from(BEATS_PER_MEASURE) * tempo.beat_seconds())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
