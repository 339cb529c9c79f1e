use super::*;
use crate::Interweaving;

impl ReachabilityTable {
  // walks back from an accepting cell to the origin and counts the steps
  // taken along each pattern. Y steps are preferred whenever the cell to
  // the left is reachable.
  fn backtrack(&self, mut i: usize, mut j: usize) -> Option<(usize, usize)> {
    let (mut cx, mut cy) = (0, 0);
    while i > 0 || j > 0 {
      if j > 0 && self.get(i, j - 1) {
        cy += 1;
        j -= 1;
      } else if i > 0 && self.get(i - 1, j) {
        cx += 1;
        i -= 1;
      } else {
        return None;
      }
    }
    Some((cx, cy))
  }

  /// Recovers the symbols attributed to each pattern, or `None` when no
  /// cell on the diagonal i+j = n is reachable.
  pub fn reconstruct(&self, x: &Pattern, y: &Pattern) -> Option<Interweaving> {
    let (endi, endj) = self.accepting_cell()?;
    let (cx, cy) = self.backtrack(endi, endj)?;
    Some(Interweaving {
      x: x.cycle_prefix(cx),
      y: y.cycle_prefix(cy),
    })
  }
}
