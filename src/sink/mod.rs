mod cue;
mod midi_message_sender;
mod midi_sink;

pub use cue::{cues, Action, Cue};
pub use midi_message_sender::MidiMessageSender;
pub use midi_sink::MidiSink;

use crate::{Result, Schedule};
use log::*;

/// Something that turns a finished schedule into sound.
pub trait PlaybackSink {
    fn play(&mut self, schedule: &Schedule) -> Result<()>;
}

/// Writes each event to the log instead of playing it.
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: usize,
}

impl PlaybackSink for LogSink {
    fn play(&mut self, schedule: &Schedule) -> Result<()> {
        for event in &schedule.events {
            let pitches: Vec<_> = event.pitches.iter().map(|pitch| pitch.to_string()).collect();
            info!(
                "{:>8.3}s {:?} {:?} [{}] for {:.3}s",
                event.start_offset,
                event.voice,
                event.kind,
                pitches.join(" "),
                event.duration
            );
            self.played += 1;
        }
        info!("Done after {:.3}s", schedule.final_cursor);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, SchedulingContext};

    #[test]
    fn log_sink_visits_every_event() {
        let schedule = compile(
            "chord A2 minor 1m\nrest 1m\nchord G2 major 1m",
            &SchedulingContext::default(),
        )
        .unwrap();
        let mut sink = LogSink::default();

        sink.play(&schedule).unwrap();

        assert_eq!(sink.played, 4);
    }
}
