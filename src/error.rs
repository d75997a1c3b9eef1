// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened
    #[error("{}: file not found ({source})", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// The output file could not be created
    #[error("{}: output file no good ({source})", path.display())]
    DestinationUnavailable { path: PathBuf, source: io::Error },

    /// Reading the input failed part way through
    #[error("{}: read failed ({source})", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing the output failed part way through
    #[error("{}: write failed ({source})", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit status for this error. Invocation errors are reported by
    /// clap, which exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceUnavailable { .. } => 3,
            Error::DestinationUnavailable { .. } => 4,
            Error::Read { .. } | Error::Write { .. } => 5,
        }
    }
}

/// A stream failure inside `expand`, which sees readers and writers but not
/// their names.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(io::Error),

    #[error("write failed: {0}")]
    Write(io::Error),
}

impl StreamError {
    /// Attaches the names of the input and output.
    pub fn at(self, source: &Path, destination: &Path) -> Error {
        match self {
            StreamError::Read(e) => Error::Read {
                path: source.to_path_buf(),
                source: e,
            },
            StreamError::Write(e) => Error::Write {
                path: destination.to_path_buf(),
                source: e,
            },
        }
    }
}

/// A rejected `-<width>` argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidthError {
    #[error("bit width must be at least 1")]
    Zero,

    #[error("invalid bit width `{0}`, expected decimal digits")]
    NotANumber(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stream_error_names_file() {
        let source = Path::new("rom.bin");
        let destination = Path::new("rom.bin.txt");

        let err = StreamError::Read(io::Error::other("bad sector")).at(source, destination);
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.to_string(), "rom.bin: read failed (bad sector)");
        assert_eq!(err.exit_code(), 5);

        let err = StreamError::Write(io::Error::other("disk full")).at(source, destination);
        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(err.to_string(), "rom.bin.txt: write failed (disk full)");
        assert_eq!(err.exit_code(), 5);
    }
}
