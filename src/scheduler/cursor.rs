use crate::Tempo;

/// Where the next event goes. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduleCursor {
    offset: f64,
    measure: u32,
}

impl ScheduleCursor {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of whole measures stepped over with [`ScheduleCursor::advance_measure`].
    pub fn measure(&self) -> u32 {
        self.measure
    }

    pub fn advance(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > 0.0 {
            self.offset += seconds;
        }
    }

    pub fn advance_measure(&mut self, tempo: Tempo) {
        self.advance(tempo.measure_seconds());
        self.measure += 1;
    }
}
