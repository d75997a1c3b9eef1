// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::expand::expand;
use crate::Options;

/// Where the converted text goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    /// Next to the input, named after it (`rom.bin` -> `rom.bin.txt`)
    #[default]
    Derived,
    Path(PathBuf),
    Stdout,
}

impl Destination {
    /// The file that will be written for `source`, if any.
    pub fn resolve(&self, source: &Path, options: &Options) -> Option<PathBuf> {
        match self {
            Destination::Derived => Some(options.format.output_path(source)),
            Destination::Path(path) => Some(path.clone()),
            Destination::Stdout => None,
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Converts the file at `source`, returning the number of bytes converted.
///
/// The source is opened first; nothing is created when it is missing. If the
/// destination then can't be created, the source handle is dropped on the way
/// out.
pub fn convert(
    source: &Path,
    destination: &Destination,
    options: &Options,
) -> Result<usize, Error> {
    debug!(
        "converting {} ({:?}, {} bits)",
        source.display(),
        options.format,
        options.width
    );

    let unavailable = |e: io::Error| Error::SourceUnavailable {
        path: source.to_path_buf(),
        source: e,
    };

    let input = File::open(source).map_err(unavailable)?;
    // opening a directory succeeds on unix, reading it doesn't
    if input.metadata().map_err(unavailable)?.is_dir() {
        return Err(unavailable(io::Error::other("is a directory")));
    }

    let count = match destination.resolve(source, options) {
        Some(path) => {
            debug!("writing {}", path.display());
            let unwritable = |e: io::Error| Error::DestinationUnavailable {
                path: path.clone(),
                source: e,
            };

            // File::create truncates, which would erase the input before it is read
            if same_file(source, &path) {
                return Err(unwritable(io::Error::other("same file as the input")));
            }

            let output = File::create(&path).map_err(unwritable)?;
            let mut writer = BufWriter::new(output);
            expand(input, &mut writer, options).map_err(|e| e.at(source, &path))?
        }
        None => expand(input, &mut io::stdout().lock(), options)
            .map_err(|e| e.at(source, Path::new("<stdout>")))?,
    };

    info!("converted {} bytes from {}", count, source.display());

    Ok(count)
}
