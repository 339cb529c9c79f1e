//! Detection of two repeating signals woven into one symbol stream.
//! The stream is split into segments of pattern symbols, and every segment is
//! checked with a dynamic program for being an interleaving of (repeated)
//! copies of the two patterns. The longest valid interleaving is kept.

pub mod detector;
pub mod error;
pub mod input;
pub mod interleave;
pub mod pattern;
pub mod report;
pub mod segmenter;
pub mod timing;
pub mod tracker;

pub use detector::{Detector, Mode, Outcome, Rejection, SegmentReport};
pub use error::{Error, ExitCode, Result};
pub use input::SignalInput;
pub use interleave::ReachabilityTable;
pub use pattern::{Alphabet, Pattern};
pub use report::{Reporter, TextReporter};
pub use segmenter::{Segment, SignalReader};
pub use timing::Timing;
pub use tracker::BestMatch;

/// The symbols of a segment attributed to each pattern.
/// Both parts are prefixes of the cyclic expansion of their pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interweaving {
  pub x: String,
  pub y: String,
}

impl Interweaving {
  pub fn combined_len(&self) -> usize {
    self.x.chars().count() + self.y.chars().count()
  }

  // both parts must contain their literal pattern at least once
  pub fn is_signal(&self, x: &Pattern, y: &Pattern) -> bool {
    self.x.starts_with(x.as_str()) && self.y.starts_with(y.as_str())
  }
}
