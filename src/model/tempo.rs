use crate::ScriptError;
use std::fmt;

pub const BEATS_PER_MEASURE: u32 = 4;

/// Beats per minute, always strictly positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tempo(u32);

impl Tempo {
    pub const DEFAULT_BPM: u32 = 120;

    pub fn new(bpm: u32) -> Result<Self, ScriptError> {
        if bpm == 0 {
            return Err(ScriptError::InvalidTempo(bpm.to_string()));
        }

        Ok(Self(bpm))
    }

    pub fn bpm(self) -> u32 {
        self.0
    }

    pub fn beat_seconds(self) -> f64 {
        60.0 / f64::from(self.0)
    }

    pub fn measure_seconds(self) -> f64 {
        self.beat_seconds() * f64::from(BEATS_PER_MEASURE)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(Self::DEFAULT_BPM)
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_120() {
        assert_eq!(Tempo::default().bpm(), 120);
        assert_eq!(Tempo::default().measure_seconds(), 2.0);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(
            Tempo::new(0),
            Err(ScriptError::InvalidTempo("0".to_string()))
        );
    }

    #[test]
    fn beat_seconds() {
        assert_eq!(Tempo::new(60).unwrap().beat_seconds(), 1.0);
        assert_eq!(Tempo::new(90).unwrap().measure_seconds(), 60.0 / 90.0 * 4.0);
    }
}
