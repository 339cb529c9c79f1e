//! Command line entry point: reads the three input records from a file and
//! reports every candidate segment, then the best match.

use std::{io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use signal_weave::{Detector, ExitCode, Mode, SignalInput, TextReporter};

/// Find two repeating signals interwoven in a stream of symbols
#[derive(Parser)]
#[command(name = "signal-weave")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Input file: pattern x, pattern y and the stream, one per line
  #[arg(value_name = "FILE")]
  file: PathBuf,

  /// Read the stream one symbol at a time and analyze each segment as soon as it is complete
  #[arg(long)]
  stream: bool,

  /// Print segment count and timings to stderr after the run
  #[arg(long)]
  profile: bool,

  /// Print each segment's reachability table
  #[arg(long)]
  show_table: bool,
}

fn init_logging() {
  let filter = EnvFilter::try_from_env("SIGNAL_WEAVE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

  fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  init_logging();

  let exit_code = match run() {
    Ok(()) => ExitCode::Success,
    Err(e) => {
      eprintln!("signal-weave: {e}");
      match e.downcast_ref::<signal_weave::Error>() {
        Some(err) => ExitCode::from(err),
        None => ExitCode::InternalError,
      }
    }
  };

  std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let input = SignalInput::from_path(&cli.file)?;
  tracing::debug!(
    x = %input.x,
    y = %input.y,
    stream_len = input.stream.chars().count(),
    "loaded input from {}",
    cli.file.display()
  );

  let mut detector = Detector::new(&input.x, &input.y)?.keep_tables(cli.show_table);
  let mut reporter = TextReporter::new(io::stdout().lock());
  detector.run(&input.stream, Mode::from_stream_flag(cli.stream), &mut reporter)?;

  if cli.profile {
    eprintln!("{}", detector.timing().format_text());
  }
  Ok(())
}
