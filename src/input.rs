use crate::error::{Error, Result};
use std::{fs, path::Path};

/// The three input records: pattern x, pattern y and the raw stream.
/// Surrounding whitespace is stripped from each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalInput {
  pub x: String,
  pub y: String,
  pub stream: String,
}

impl SignalInput {
  pub fn parse(text: &str) -> Result<Self> {
    let records: Vec<&str> = text.lines().map(str::trim).collect();
    match records.as_slice() {
      [x, y, stream] => Ok(Self {
        x: x.to_string(),
        y: y.to_string(),
        stream: stream.to_string(),
      }),
      _ => Err(Error::MalformedInputRecord { found: records.len() }),
    }
  }

  pub fn from_path(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use test_case::test_case;

  #[test_case("ab\ncd\nacbd\n" ; "trailing newline")]
  #[test_case("ab\ncd\nacbd" ; "no trailing newline")]
  #[test_case("  ab \r\n\tcd\r\n acbd  \r\n" ; "whitespace and crlf")]
  fn three_records(text: &str) {
    let expected = SignalInput { x: "ab".into(), y: "cd".into(), stream: "acbd".into() };
    assert_eq!(expected, SignalInput::parse(text).unwrap());
  }

  #[test_case("", 0)]
  #[test_case("ab\ncd", 2)]
  #[test_case("ab\ncd\nacbd\n\n", 4 ; "extra blank record")]
  fn wrong_record_count(text: &str, found: usize) {
    let err = SignalInput::parse(text).unwrap_err();
    assert!(matches!(err, Error::MalformedInputRecord { found: f } if f == found));
  }

  #[test]
  fn empty_pattern_record_is_kept() {
    let input = SignalInput::parse("\ncd\nacbd\n").unwrap();
    assert_eq!("", input.x);
  }

  #[test]
  fn reads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a\nb\nababab\n").unwrap();
    let input = SignalInput::from_path(file.path()).unwrap();
    assert_eq!("ababab", input.stream);
  }

  #[test]
  fn missing_file_names_the_path() {
    let err = SignalInput::from_path(Path::new("/nonexistent/signals.txt")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("signals.txt"));
  }
}
