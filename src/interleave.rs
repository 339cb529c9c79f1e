use crate::pattern::Pattern;
use itertools::Itertools;
use std::fmt;

mod reconstruct;

/// Triangular reachability table of the interleaving DP.
///
/// Cell (i, j) says whether consuming i symbols of the cyclic X and j
/// symbols of the cyclic Y, in some order, spells the first i+j symbols of
/// the segment. Only cells with i+j <= n exist: no accepting path can
/// consume more symbols than the segment has, so the table is bounded by
/// the segment and not by the pattern lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachabilityTable {
  /// segment length
  n: usize,
  /// row i holds columns 0..=n-i, rows stored back to back
  cells: Vec<bool>,
}

impl ReachabilityTable {
  // start of row i; rows shrink by one from n+1 cells
  fn offset(&self, i: usize) -> usize {
    i * (2 * self.n + 3 - i) / 2
  }

  /// Runs the DP over `segment`. O(n²) time and space in the segment length.
  pub fn fill(x: &Pattern, y: &Pattern, segment: &str) -> Self {
    let s: Vec<char> = segment.chars().collect();
    let n = s.len();
    let mut table = Self {
      n,
      cells: vec![false; (n + 1) * (n + 2) / 2],
    };

    for i in 0..=n {
      let row = table.offset(i);
      for j in 0..=n - i {
        let reachable = if i == 0 && j == 0 {
          true
        } else {
          let c = s[i + j - 1];
          (i > 0 && table.get(i - 1, j) && x.symbol_at(i - 1) == c)
            || (j > 0 && table.get(i, j - 1) && y.symbol_at(j - 1) == c)
        };
        table.cells[row + j] = reachable;
      }
    }
    table
  }

  /// Length of the segment the table was built for
  pub fn segment_len(&self) -> usize {
    self.n
  }

  /// Cells outside the triangle are unreachable.
  pub fn get(&self, i: usize, j: usize) -> bool {
    if i + j > self.n {
      return false;
    }
    self.cells[self.offset(i) + j]
  }

  pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
    (0..=self.n).map(move |i| {
      let row = self.offset(i);
      &self.cells[row..row + self.n - i + 1]
    })
  }

  /// The accepting cell (i, n-i) with the smallest i, if any
  pub fn accepting_cell(&self) -> Option<(usize, usize)> {
    (0..=self.n)
      .map(|i| (i, self.n - i))
      .find(|&(i, j)| self.get(i, j))
  }
}

impl fmt::Display for ReachabilityTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in self.rows() {
      writeln!(f, "{}", row.iter().join(","))?;
    }
    Ok(())
  }
}
