use crate::Interweaving;

/// Longest interleaving seen so far. Ties keep the one found first.
#[derive(Clone, Debug, Default)]
pub struct BestMatch {
  best: Option<Interweaving>,
}

impl BestMatch {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns whether `candidate` became the new best
  pub fn consider(&mut self, candidate: Option<&Interweaving>) -> bool {
    let Some(candidate) = candidate else {
      return false;
    };
    let better = match &self.best {
      None => true,
      Some(best) => candidate.combined_len() > best.combined_len(),
    };
    if better {
      self.best = Some(candidate.clone());
    }
    better
  }

  pub fn current(&self) -> Option<&Interweaving> {
    self.best.as_ref()
  }

  pub fn combined_len(&self) -> usize {
    self.best.as_ref().map_or(0, Interweaving::combined_len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, Rng, SeedableRng};

  fn weave(x: &str, y: &str) -> Interweaving {
    Interweaving { x: x.into(), y: y.into() }
  }

  #[test]
  fn no_match_is_ignored() {
    let mut best = BestMatch::new();
    assert!(!best.consider(None));
    assert_eq!(None, best.current());
  }

  #[test]
  fn longer_replaces_and_ties_keep_the_first() {
    let mut best = BestMatch::new();
    assert!(best.consider(Some(&weave("ab", "cd"))));
    assert!(!best.consider(Some(&weave("a", "cdc"))));
    assert_eq!(Some(&weave("ab", "cd")), best.current());
    assert!(best.consider(Some(&weave("aba", "cd"))));
    assert!(!best.consider(Some(&weave("a", "c"))));
    assert_eq!(Some(&weave("aba", "cd")), best.current());
  }

  #[test]
  fn combined_length_never_decreases() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut best = BestMatch::new();
    let mut last = 0;
    for _ in 0..200 {
      let candidate = weave(&"a".repeat(rng.gen_range(0..10)), &"b".repeat(rng.gen_range(0..10)));
      let candidate = if rng.gen_bool(0.2) { None } else { Some(&candidate) };
      best.consider(candidate);
      assert!(best.combined_len() >= last);
      last = best.combined_len();
    }
  }
}
