use crate::error::{Error, Result};
use std::collections::HashSet;

/// A reference pattern, read as its infinite cyclic repetition.
///
/// The k-th symbol is `literal[k mod len]`, so the matcher may ask for
/// arbitrarily many symbols without the pattern ever growing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
  literal: String,
  symbols: Vec<char>,
}

impl Pattern {
  /// `label` only names the pattern in the error.
  pub fn new(label: &'static str, literal: &str) -> Result<Self> {
    let symbols: Vec<char> = literal.chars().collect();
    if symbols.is_empty() {
      return Err(Error::InvalidPattern { label });
    }
    Ok(Self { literal: literal.to_string(), symbols })
  }

  /// Length of one period (never 0)
  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  /// Always false; construction rejects empty patterns
  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }

  pub fn as_str(&self) -> &str {
    &self.literal
  }

  // returns pattern[k mod len]; no bound on k
  pub fn symbol_at(&self, k: usize) -> char {
    self.symbols[k % self.symbols.len()]
  }

  /// The first `n` symbols of the cyclic expansion
  pub fn cycle_prefix(&self, n: usize) -> String {
    self.symbols.iter().cycle().take(n).collect()
  }
}

/// Union of the symbols of both patterns. Anything outside is a separator.
#[derive(Clone, Debug)]
pub struct Alphabet {
  symbols: HashSet<char>,
}

impl Alphabet {
  pub fn of(x: &Pattern, y: &Pattern) -> Self {
    Self {
      symbols: x.symbols.iter().chain(y.symbols.iter()).copied().collect(),
    }
  }

  pub fn contains(&self, c: char) -> bool {
    self.symbols.contains(&c)
  }
}
