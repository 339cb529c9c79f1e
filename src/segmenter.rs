use crate::error::{Error, Result};
use crate::pattern::Alphabet;

/// A maximal run of alphabet symbols, possibly stitched onto the run
/// returned before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
  pub text: String,
  /// Stream position one past the last symbol read
  pub end: usize,
  /// Whether `text` starts with the previously returned segment
  pub continued: bool,
}

#[derive(Debug)]
enum Previous {
  Idle,
  Segment { text: String, end: usize },
}

/// Splits an append-only stream into segments.
///
/// When a new run begins exactly where the previous segment ended, no
/// separator was seen in between and the run is reported as a continuation
/// of that segment. This is what lets the streaming mode re-evaluate a
/// segment as it grows symbol by symbol.
#[derive(Debug)]
pub struct SignalReader {
  alphabet: Alphabet,
  stream: Vec<char>,
  cursor: usize,
  previous: Previous,
}

impl SignalReader {
  pub fn new(alphabet: Alphabet, stream: &str) -> Self {
    Self {
      alphabet,
      stream: stream.chars().collect(),
      cursor: 0,
      previous: Previous::Idle,
    }
  }

  /// Appends one symbol, simulating arrival from the network
  pub fn push(&mut self, symbol: char) {
    self.stream.push(symbol);
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  fn skip_separators(&mut self) {
    while self.cursor < self.stream.len() && !self.alphabet.contains(self.stream[self.cursor]) {
      self.cursor += 1;
    }
  }

  /// Whether an unread alphabet symbol remains. Moves the cursor past
  /// separators only, so repeated calls observe the same answer.
  pub fn has_next(&mut self) -> bool {
    self.skip_separators();
    self.cursor < self.stream.len()
  }

  pub fn next_segment(&mut self) -> Result<Segment> {
    self.skip_separators();
    let start = self.cursor;
    if start >= self.stream.len() {
      return Err(Error::NoSegmentAvailable { cursor: start });
    }

    while self.cursor < self.stream.len() && self.alphabet.contains(self.stream[self.cursor]) {
      self.cursor += 1;
    }
    let run = self.stream[start..self.cursor].iter();

    let (text, continued) = match std::mem::replace(&mut self.previous, Previous::Idle) {
      Previous::Segment { mut text, end } if end == start => {
        text.extend(run);
        (text, true)
      }
      _ => (run.collect(), false),
    };

    self.previous = Previous::Segment { text: text.clone(), end: self.cursor };
    Ok(Segment { text, end: self.cursor, continued })
  }
}
