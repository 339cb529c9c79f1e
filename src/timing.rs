//! Timing data for the --profile flag.

use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timing {
  /// Number of segments analyzed
  pub segments: usize,
  /// Time spent filling and backtracking reachability tables
  pub matching: Duration,
  /// Total elapsed time of the run
  pub total: Duration,
}

impl Timing {
  pub fn record_segment(&mut self, elapsed: Duration) {
    self.segments += 1;
    self.matching += elapsed;
  }

  pub fn record_total(&mut self, elapsed: Duration) {
    self.total += elapsed;
  }

  /// Format as text output lines for stderr.
  pub fn format_text(&self) -> String {
    format!(
      "segments: {}\nmatching: {}ms\ntotal: {}ms",
      self.segments,
      self.matching.as_millis(),
      self.total.as_millis()
    )
  }
}
