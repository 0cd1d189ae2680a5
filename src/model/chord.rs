use crate::{ChordQuality, Pitch, ScriptError};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Chord {
    pub root: Pitch,
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: Pitch, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Root first, then each chord tone above it in offset order.
    pub fn pitches(&self) -> Vec<Pitch> {
        self.quality
            .offsets()
            .iter()
            .map(|&offset| self.root.transpose(offset))
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

/// Builds the concrete pitches for a `root` token such as `A2` and a quality name such as `minor`.
pub fn resolve_chord(root: &str, quality: &str) -> Result<Vec<Pitch>, ScriptError> {
    let quality = ChordQuality::parse(quality)?;
    let root = Pitch::parse(root)?;

    Ok(Chord::new(root, quality).pitches())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PitchClass::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_chord_has_three_pitches() {
        for root in (0..=7).flat_map(Pitch::all_in_octave) {
            for quality in ChordQuality::iter() {
                let chord = Chord::new(root, quality);
                let pitches = chord.pitches();

                assert_eq!(pitches.len(), 3);
                assert_eq!(pitches[0], root);
                assert_eq!(pitches, chord.pitches());
                assert!(pitches
                    .windows(2)
                    .all(|pair| pair[0].midi_number() < pair[1].midi_number()));
            }
        }
    }

    #[test]
    fn a_minor() {
        assert_eq!(
            resolve_chord("A2", "minor").unwrap(),
            vec![Pitch::new(A, 2), Pitch::new(C, 3), Pitch::new(E, 3)]
        );
    }

    #[test]
    fn augmented_wraps_octave() {
        assert_eq!(
            resolve_chord("B4", "augmented").unwrap(),
            vec![Pitch::new(B, 4), Pitch::new(DSharp, 5), Pitch::new(G, 5)]
        );
    }

    #[test]
    fn reports_bad_quality() {
        assert_eq!(
            resolve_chord("A2", "sus2"),
            Err(ScriptError::UnsupportedChordQuality("sus2".to_string()))
        );
    }

    #[test]
    fn reports_bad_root() {
        assert_eq!(
            resolve_chord("Am", "minor"),
            Err(ScriptError::InvalidRootFormat("Am".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Chord::new(Pitch::new(FSharp, 3), ChordQuality::Diminished).to_string(),
            "F#3 diminished"
        );
    }
}
