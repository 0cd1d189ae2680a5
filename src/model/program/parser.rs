use super::{Program, Statement};
use crate::{Command, Diagnostic, Duration, Letter, ScriptError, Tempo};
use combine::{
    many, many1, optional,
    parser::char::digit,
    satisfy, token, Parser,
};
use log::*;

const SET_TEMPO: &str = "setTempo";
const CHORD: &str = "chord";
const PLAY: &str = "play";
const REST: &str = "rest";

/// Parses program text line by line.
///
/// Malformed lines are skipped and reported; they never abort the parse.
pub fn parse_program(text: &str) -> (Program, Vec<Diagnostic>) {
    let mut statements = vec![];
    let mut diagnostics = vec![];

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        match parse_line(line) {
            Ok(Some(command)) => statements.push(Statement {
                line: Some(line_number),
                command,
            }),
            Ok(None) => (),
            Err(error) => {
                debug!("Skipping line {}: {}", line_number, error);
                diagnostics.push(Diagnostic::new(Some(line_number), error));
            }
        }
    }

    (Program::new(statements), diagnostics)
}

fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if is_inert(line) {
        return Ok(None);
    }

    let tokens: Vec<_> = line.split_whitespace().collect();
    let malformed = || ScriptError::MalformedCommandLine(line.to_string());

    let command = match tokens.as_slice() {
        [keyword, ..] if is_set_tempo(keyword) => parse_set_tempo(line)?,
        [CHORD, root, quality, duration] => Command::Chord {
            root: root.to_string(),
            quality: quality.to_string(),
            duration: Duration::new(*duration),
        },
        [PLAY, pitch, duration] => Command::Note {
            pitch: pitch.to_string(),
            duration: Duration::new(*duration),
        },
        [REST, duration] => Command::Rest {
            duration: Duration::new(*duration),
        },
        [pitch, duration] if starts_with_note_letter(pitch) => Command::Note {
            pitch: pitch.to_string(),
            duration: Duration::new(*duration),
        },
        _ => return Err(malformed()),
    };

    Ok(Some(command))
}

/// Blank lines, comments and block punctuation such as `track1 {` or `}`.
fn is_inert(line: &str) -> bool {
    if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
        return true;
    }

    if line.chars().all(|c| c == '{' || c == '}' || c.is_whitespace()) {
        return true;
    }

    match line.strip_suffix('{') {
        Some(header) => {
            let header = header.trim();
            !header.is_empty()
                && header
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

fn starts_with_note_letter(token: &str) -> bool {
    Letter::parser::<&str>().parse(token).is_ok()
}

fn is_set_tempo(keyword: &str) -> bool {
    keyword == SET_TEMPO
        || keyword
            .strip_prefix(SET_TEMPO)
            .map_or(false, |rest| rest.starts_with('('))
}

/// Takes the first integer literal after the keyword, so `setTempo 120`, `setTempo(120);` and
/// `setTempo 120 bpm` all set 120. Negative or fractional literals are rejected.
fn parse_set_tempo(line: &str) -> Result<Command, ScriptError> {
    let argument = line[SET_TEMPO.len()..].trim();
    if argument.is_empty() || argument == "()" {
        return Err(ScriptError::MalformedCommandLine(line.to_string()));
    }

    let invalid = || ScriptError::InvalidTempo(argument.to_string());

    let mut literal_parser = (
        many::<String, _, _>(satisfy(|c: char| !c.is_ascii_digit())),
        many1::<String, _, _>(digit()),
        optional(token('.')),
    );
    let ((prefix, digits, dot), _) = literal_parser.parse(argument).map_err(|_| invalid())?;

    if prefix.ends_with('-') || dot.is_some() {
        return Err(invalid());
    }

    let bpm = digits.parse::<u32>().map_err(|_| invalid())?;

    Ok(Command::SetTempo {
        tempo: Tempo::new(bpm).map_err(|_| invalid())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(text: &str) -> Vec<Command> {
        let (program, diagnostics) = parse_program(text);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        program.commands().cloned().collect()
    }

    #[test]
    fn it_parses_a_chord_progression() {
        assert_eq!(
            commands("setTempo(120)\nchord A2 minor 1m\nchord E2 minor 1m\nchord F2 major 1m\nchord C3 major 1m\n"),
            vec![
                Command::set_tempo(Tempo::new(120).unwrap()),
                Command::chord("A2", "minor", "1m"),
                Command::chord("E2", "minor", "1m"),
                Command::chord("F2", "major", "1m"),
                Command::chord("C3", "major", "1m"),
            ]
        )
    }

    #[test]
    fn it_parses_notes_and_rests() {
        assert_eq!(
            commands("setTempo 90\nplay C4 1/4\nD4 1/8\nrest 1/4\nF#4 4n."),
            vec![
                Command::set_tempo(Tempo::new(90).unwrap()),
                Command::note("C4", "1/4"),
                Command::note("D4", "1/8"),
                Command::rest("1/4"),
                Command::note("F#4", "4n."),
            ]
        )
    }

    #[test]
    fn it_records_line_numbers() {
        let (program, _) = parse_program("\n// intro\nchord A2 minor 1m\n\nrest 1m\n");

        let lines: Vec<_> = program
            .statements
            .iter()
            .map(|statement| statement.line)
            .collect();
        assert_eq!(lines, vec![Some(3), Some(5)]);
    }

    #[test]
    fn it_skips_inert_lines() {
        assert_eq!(
            commands("track1 {\n  chord A2 minor 1m\n}\n# comment\n// comment\n{\n"),
            vec![Command::chord("A2", "minor", "1m")]
        );
    }

    #[test]
    fn it_defers_chord_validation() {
        assert_eq!(
            commands("chord Am sus4 7q"),
            vec![Command::chord("Am", "sus4", "7q")]
        );
    }

    #[test]
    fn it_recovers_from_malformed_lines() {
        let (program, diagnostics) =
            parse_program("chord A2 minor 1m\nchord E2 minor\nchord F2 major 1m\n");

        assert_eq!(
            program.commands().cloned().collect::<Vec<_>>(),
            vec![
                Command::chord("A2", "minor", "1m"),
                Command::chord("F2", "major", "1m"),
            ]
        );
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(
                Some(2),
                ScriptError::MalformedCommandLine("chord E2 minor".to_string())
            )]
        );
    }

    #[test]
    fn it_rejects_unknown_keywords_and_arity() {
        for line in &["strum A2 1m", "chord A2 minor 1m extra", "rest", "play C4", "c4 1/4"] {
            let (program, diagnostics) = parse_program(line);
            assert!(program.is_empty(), "{}", line);
            assert_eq!(
                diagnostics,
                vec![Diagnostic::new(
                    Some(1),
                    ScriptError::MalformedCommandLine(line.to_string())
                )]
            );
        }
    }

    #[test]
    fn it_rejects_bad_tempos() {
        for (line, argument) in &[
            ("setTempo 0", "0"),
            ("setTempo(-20)", "(-20)"),
            ("setTempo 12.5", "12.5"),
            ("setTempo fast", "fast"),
            ("setTempo 99999999999", "99999999999"),
        ] {
            let (program, diagnostics) = parse_program(line);
            assert!(program.is_empty());
            assert_eq!(
                diagnostics,
                vec![Diagnostic::new(
                    Some(1),
                    ScriptError::InvalidTempo(argument.to_string())
                )]
            );
        }
    }

    #[test]
    fn it_takes_the_first_integer_in_set_tempo() {
        for (line, bpm) in &[
            ("setTempo(120);", 120),
            ("setTempo(90) // slow", 90),
            ("setTempo 100 bpm", 100),
            ("setTempo ( 72 )", 72),
        ] {
            assert_eq!(
                commands(line),
                vec![Command::set_tempo(Tempo::new(*bpm).unwrap())],
                "{}",
                line
            );
        }
    }

    #[test]
    fn it_matches_the_set_tempo_keyword_exactly() {
        for line in &["setTempoo 80", "setTempos(80)"] {
            let (program, diagnostics) = parse_program(line);
            assert!(program.is_empty());
            assert_eq!(
                diagnostics,
                vec![Diagnostic::new(
                    Some(1),
                    ScriptError::MalformedCommandLine(line.to_string())
                )]
            );
        }
    }

    #[test]
    fn it_rejects_set_tempo_without_a_value() {
        for line in &["setTempo", "setTempo()"] {
            let (_, diagnostics) = parse_program(line);
            assert_eq!(
                diagnostics,
                vec![Diagnostic::new(
                    Some(1),
                    ScriptError::MalformedCommandLine(line.to_string())
                )]
            );
        }
    }

    #[test]
    fn it_round_trips_canonical_text() {
        let (program, _) = parse_program(
            "setTempo(100)\nchord A2 minor 1m\n\nrest 1/2\nchord C#3 augmented 2n\n",
        );

        let (reparsed, diagnostics) = parse_program(&program.to_string());

        assert!(diagnostics.is_empty());
        assert_eq!(
            reparsed.commands().collect::<Vec<_>>(),
            program.commands().collect::<Vec<_>>()
        );
    }
}
