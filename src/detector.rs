use crate::{
  Interweaving,
  error::Result,
  interleave::ReachabilityTable,
  pattern::{Alphabet, Pattern},
  report::Reporter,
  segmenter::SignalReader,
  timing::Timing,
  tracker::BestMatch,
};
use std::time::Instant;
use tracing::{debug, info, trace};

/// How the stream is delivered to the segmenter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
  /// The whole stream is known up front
  #[default]
  Batch,
  /// Symbols arrive one at a time; every available segment is analyzed
  /// before the next symbol is appended
  Streaming,
}

impl Mode {
  pub fn from_stream_flag(as_stream: bool) -> Self {
    if as_stream { Mode::Streaming } else { Mode::Batch }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
  /// No cell on the diagonal i+j = n was reachable
  NoAcceptingCell,
  /// The table admits an interleaving, but one side never completes its pattern
  PartialPattern(Interweaving),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
  Signal(Interweaving),
  Invalid(Rejection),
}

impl Outcome {
  pub fn signal(&self) -> Option<&Interweaving> {
    match self {
      Outcome::Signal(found) => Some(found),
      Outcome::Invalid(_) => None,
    }
  }
}

#[derive(Clone, Debug)]
pub struct SegmentReport {
  pub segment: String,
  pub outcome: Outcome,
  /// Only kept when the detector was asked to keep tables
  pub table: Option<ReachabilityTable>,
}

/// Feeds segments through matcher, reconstructor and best-match tracker.
#[derive(Debug)]
pub struct Detector {
  x: Pattern,
  y: Pattern,
  alphabet: Alphabet,
  best: BestMatch,
  keep_tables: bool,
  timing: Timing,
}

impl Detector {
  pub fn new(x: &str, y: &str) -> Result<Self> {
    let x = Pattern::new("SIGX", x)?;
    let y = Pattern::new("SIGY", y)?;
    let alphabet = Alphabet::of(&x, &y);
    Ok(Self {
      x,
      y,
      alphabet,
      best: BestMatch::new(),
      keep_tables: false,
      timing: Timing::default(),
    })
  }

  /// Attach each segment's reachability table to its report
  pub fn keep_tables(mut self, keep: bool) -> Self {
    self.keep_tables = keep;
    self
  }

  pub fn best(&self) -> Option<&Interweaving> {
    self.best.current()
  }

  pub fn timing(&self) -> &Timing {
    &self.timing
  }

  /// Analyzes one segment and updates the best match.
  pub fn process(&mut self, segment: &str) -> SegmentReport {
    let started = Instant::now();
    let table = ReachabilityTable::fill(&self.x, &self.y, segment);
    let found = table.reconstruct(&self.x, &self.y);
    self.timing.record_segment(started.elapsed());
    trace!("reachability table for {segment}:\n{table}");

    let outcome = match found {
      None => Outcome::Invalid(Rejection::NoAcceptingCell),
      Some(found) if found.is_signal(&self.x, &self.y) => {
        if self.best.consider(Some(&found)) {
          debug!(len = found.combined_len(), "new best match");
        }
        Outcome::Signal(found)
      }
      Some(found) => Outcome::Invalid(Rejection::PartialPattern(found)),
    };
    debug!(len = table.segment_len(), signal = outcome.signal().is_some(), "processed segment");

    SegmentReport {
      segment: segment.to_string(),
      outcome,
      table: self.keep_tables.then_some(table),
    }
  }

  fn drain<R: Reporter>(&mut self, reader: &mut SignalReader, reporter: &mut R) -> Result<()> {
    while reader.has_next() {
      let segment = reader.next_segment()?;
      let report = self.process(&segment.text);
      reporter.segment(&report)?;
    }
    Ok(())
  }

  /// Runs the whole stream in the given mode, reporting every segment as
  /// soon as it is analyzed, then the best match.
  ///
  /// Each analysis is O(n²) in the segment length n. In streaming mode a
  /// segment is analyzed again after every symbol that extends it, so a
  /// stream of length N without separators costs O(N³) over the whole run.
  pub fn run<R: Reporter>(&mut self, stream: &str, mode: Mode, reporter: &mut R) -> Result<Option<&Interweaving>> {
    let started = Instant::now();
    match mode {
      Mode::Batch => {
        let mut reader = SignalReader::new(self.alphabet.clone(), stream);
        self.drain(&mut reader, reporter)?;
      }
      Mode::Streaming => {
        let mut reader = SignalReader::new(self.alphabet.clone(), "");
        for symbol in stream.chars() {
          reader.push(symbol);
          self.drain(&mut reader, reporter)?;
        }
      }
    }
    self.timing.record_total(started.elapsed());

    match self.best.current() {
      Some(best) => info!(x = %best.x, y = %best.y, "best match"),
      None => info!("no valid signal detected"),
    }
    reporter.summary(self.best.current())?;
    Ok(self.best.current())
  }
}
