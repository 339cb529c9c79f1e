use std::{io, path::PathBuf};

/// Fatal conditions. Not finding an interleaving is never one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A pattern without symbols cannot be repeated
  #[error("invalid pattern: {label} must contain at least one symbol")]
  InvalidPattern { label: &'static str },

  /// Segment extraction was requested while the stream had nothing left to read
  #[error("no segment available at stream position {cursor}")]
  NoSegmentAvailable { cursor: usize },

  /// The input did not consist of pattern x, pattern y and the stream
  #[error("malformed input: expected 3 records (pattern x, pattern y, stream), found {found}")]
  MalformedInputRecord { found: usize },

  /// Reading the input file failed
  #[error("io error: {}: {}", .path.display(), .source)]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Writing a report failed
  #[error("output error: {0}")]
  Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit status for the command line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
  /// The run completed, whether or not a signal was found
  Success = 0,
  /// Patterns or input records were unusable
  InputError = 2,
  /// Contract violation or I/O failure
  InternalError = 3,
}

impl From<&Error> for ExitCode {
  fn from(err: &Error) -> Self {
    match err {
      Error::InvalidPattern { .. } | Error::MalformedInputRecord { .. } => ExitCode::InputError,
      Error::NoSegmentAvailable { .. } => ExitCode::InternalError,
      Error::Io { .. } | Error::Output(_) => ExitCode::InternalError,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case(Error::InvalidPattern { label: "SIGX" }, ExitCode::InputError ; "empty pattern")]
  #[test_case(Error::MalformedInputRecord { found: 2 }, ExitCode::InputError ; "two records")]
  #[test_case(Error::NoSegmentAvailable { cursor: 4 }, ExitCode::InternalError ; "drained reader")]
  #[test_case(Error::Output(io::Error::other("closed")), ExitCode::InternalError ; "broken pipe")]
  fn exit_codes(err: Error, expected: ExitCode) {
    assert_eq!(expected, ExitCode::from(&err));
  }

  #[test]
  fn messages_name_the_defect() {
    let err = Error::MalformedInputRecord { found: 4 };
    assert!(err.to_string().contains("found 4"));

    let err = Error::Io {
      path: PathBuf::from("signals.txt"),
      source: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };
    assert!(err.to_string().contains("signals.txt"));
  }
}
