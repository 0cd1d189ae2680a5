use std::path::PathBuf;
use std::process;

use chord_runner::{
    compile,
    sink::{LogSink, MidiSink, PlaybackSink},
    Config, Diagnostic, Result,
};
use log::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "chord-runner", about = "Turns chord and note scripts into timed playback")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The program to run, one command per line.
    #[structopt(parse(from_os_str))]
    source: PathBuf,

    /// YAML config file.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Print the schedule as YAML.
    #[structopt(long)]
    dump: bool,

    /// Play the schedule on a MIDI output instead of logging it.
    #[structopt(long)]
    play: bool,
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(err) = simple_logger::init_with_level(level) {
        eprintln!("Could not set up logging: {}", err);
    }

    match run(&opt) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{:#}", err);
            process::exit(2);
        }
    }
}

/// Returns whether there was anything to play.
fn run(opt: &Opt) -> Result<bool> {
    let config = match &opt.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let source = std::fs::read_to_string(&opt.source)?;

    let schedule = match compile(&source, &config.scheduling_context()) {
        Ok(schedule) => schedule,
        Err(rejected) => {
            report(&rejected.diagnostics);
            error!("{}", rejected);
            return Ok(false);
        }
    };
    report(&schedule.diagnostics);

    if opt.dump {
        print!("{}", serde_yaml::to_string(&schedule)?);
    }

    if opt.play {
        MidiSink::connect(&config)?.play(&schedule)?;
    } else if !opt.dump {
        LogSink::default().play(&schedule)?;
    }

    Ok(true)
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        warn!("{}", diagnostic);
    }
}
