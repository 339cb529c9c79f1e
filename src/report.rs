use crate::{
  Interweaving,
  detector::{Outcome, SegmentReport},
};
use std::io::{self, Write};

/// Receives each segment as it is analyzed, then the final best match.
pub trait Reporter {
  fn segment(&mut self, report: &SegmentReport) -> io::Result<()>;

  fn summary(&mut self, best: Option<&Interweaving>) -> io::Result<()>;
}

/// Collects the segment reports, ignores the summary
impl Reporter for Vec<SegmentReport> {
  fn segment(&mut self, report: &SegmentReport) -> io::Result<()> {
    self.push(report.clone());
    Ok(())
  }

  fn summary(&mut self, _best: Option<&Interweaving>) -> io::Result<()> {
    Ok(())
  }
}

/// Human readable report, one block per segment
pub struct TextReporter<W: Write> {
  out: W,
}

impl<W: Write> TextReporter<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  fn interweaving(&mut self, found: &Interweaving) -> io::Result<()> {
    writeln!(self.out, "\tSIGX: {}", found.x)?;
    writeln!(self.out, "\tSIGY: {}", found.y)
  }
}

impl<W: Write> Reporter for TextReporter<W> {
  fn segment(&mut self, report: &SegmentReport) -> io::Result<()> {
    writeln!(self.out, "Found Possible Signal: {}", report.segment)?;
    if let Some(table) = &report.table {
      writeln!(self.out, "Answer table:")?;
      write!(self.out, "{table}")?;
    }
    match &report.outcome {
      Outcome::Signal(found) => {
        writeln!(self.out, "Interwoven Signals:")?;
        self.interweaving(found)?;
      }
      Outcome::Invalid(_) => writeln!(self.out, "Invalid Signal")?,
    }
    writeln!(self.out)
  }

  fn summary(&mut self, best: Option<&Interweaving>) -> io::Result<()> {
    match best {
      Some(best) => {
        writeln!(self.out, "Best Match:")?;
        self.interweaving(best)?;
      }
      None => writeln!(self.out, "No valid signal detected")?,
    }
    self.out.flush()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detector::{Detector, Mode};

  fn render(x: &str, y: &str, stream: &str, tables: bool) -> String {
    let mut detector = Detector::new(x, y).unwrap().keep_tables(tables);
    let mut reporter = TextReporter::new(Vec::new());
    detector.run(stream, Mode::Batch, &mut reporter).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
  }

  #[test]
  fn signal_then_best_match() {
    let expected = "Found Possible Signal: acbd\n\
                    Interwoven Signals:\n\
                    \tSIGX: ab\n\
                    \tSIGY: cd\n\
                    \n\
                    Best Match:\n\
                    \tSIGX: ab\n\
                    \tSIGY: cd\n";
    assert_eq!(expected, render("ab", "cd", "acbd", false));
  }

  #[test]
  fn invalid_segments_then_no_signal() {
    let expected = "Found Possible Signal: ac\n\
                    Invalid Signal\n\
                    \n\
                    Found Possible Signal: bd\n\
                    Invalid Signal\n\
                    \n\
                    No valid signal detected\n";
    assert_eq!(expected, render("ab", "cd", "ac#bd", false));
  }

  #[test]
  fn table_is_printed_under_the_segment() {
    let out = render("a", "b", "ab", true);
    assert!(out.starts_with("Found Possible Signal: ab\nAnswer table:\ntrue,false,false\ntrue,true\nfalse\n"));
  }
}
