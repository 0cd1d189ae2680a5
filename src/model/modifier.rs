use combine::{choice, optional, token, Parser, Stream};
use core::fmt;
use strum_macros::EnumIter;
use Modifier::*;

#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub enum Modifier {
    Flat,
    Natural,
    Sharp,
}

impl Modifier {
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        let accidental_parser = choice((token('#').map(|_| Sharp), token('b').map(|_| Flat)));

        optional(accidental_parser).map(|modifier| modifier.unwrap_or(Natural))
    }

    pub fn offset(self) -> i32 {
        match self {
            Flat => -1,
            Natural => 0,
            Sharp => 1,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Flat => "b",
            Natural => "",
            Sharp => "#",
        };

        f.write_str(string)
    }
}
