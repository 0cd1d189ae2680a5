use crate::{ChordQuality, Pitch, PitchClass};

/// The bass note played under a chord, for the handful of chords that have one.
pub fn bass_note(root: Pitch, quality: ChordQuality) -> Option<Pitch> {
    use ChordQuality::*;
    use PitchClass::*;

    let class = match (root.class, quality) {
        (A, Minor) => A,
        (E, Minor) => E,
        (F, Major) => F,
        (C, Major) => C,
        _ => return None,
    };

    Some(Pitch::new(class, 2))
}
