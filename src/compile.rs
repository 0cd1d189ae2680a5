use crate::{parse_program, schedule, Diagnostic, Rejected, Schedule, SchedulingContext};

/// Parses and schedules `text` in one go.
///
/// Parse diagnostics are merged in front of the scheduler's, ordered by source line.
pub fn compile(text: &str, context: &SchedulingContext) -> Result<Schedule, Rejected> {
    let (program, parse_diagnostics) = parse_program(text);

    match schedule(&program, context) {
        Ok(mut schedule) => {
            schedule.diagnostics = merge(parse_diagnostics, schedule.diagnostics);
            Ok(schedule)
        }
        Err(mut rejected) => {
            rejected.diagnostics = merge(parse_diagnostics, rejected.diagnostics);
            Err(rejected)
        }
    }
}

fn merge(mut first: Vec<Diagnostic>, mut second: Vec<Diagnostic>) -> Vec<Diagnostic> {
    first.append(&mut second);
    first.sort_by_key(|diagnostic| diagnostic.line);
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptError;

    #[test]
    fn it_keeps_going_past_bad_lines() {
        let schedule = compile(
            "setTempo(120)\nchord A2 minor 1m\nchord E2 minor\nchord F2 sus2 1m\nchord C3 major 1m\n",
            &SchedulingContext::default(),
        )
        .unwrap();

        assert_eq!(schedule.events.len(), 4);
        assert_eq!(schedule.final_cursor, 6.0);
        assert_eq!(
            schedule.diagnostics,
            vec![
                Diagnostic::new(
                    Some(3),
                    ScriptError::MalformedCommandLine("chord E2 minor".to_string())
                ),
                Diagnostic::new(
                    Some(4),
                    ScriptError::UnsupportedChordQuality("sus2".to_string())
                ),
            ]
        );
    }

    #[test]
    fn it_reports_everything_on_rejection() {
        let rejected = compile("bogus\nplay C4 1/4\nchord A2 minor 1m", &SchedulingContext::default())
            .unwrap_err();

        assert_eq!(rejected.error, ScriptError::AmbiguousSchedulingModel);
        assert_eq!(
            rejected.diagnostics,
            vec![Diagnostic::new(
                Some(1),
                ScriptError::MalformedCommandLine("bogus".to_string())
            )]
        );
    }
}
