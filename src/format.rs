// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::path::{Path, PathBuf};

/// Memory tools on both sides of the fence expect DOS line endings.
pub const LINE_ENDING: &str = "\r\n";

static COE_HEADER: &str = "memory_initialization_radix=2;\r\nmemory_initialization_vector=\r\n";

/// The layout of the generated text.
///
/// `Text` is one bit string per line and nothing else, suitable for
/// `$readmemb`. `Coe` wraps the same lines in the Xilinx memory
/// initialization syntax:
///
/// ```pre
///     memory_initialization_radix=2;
///     memory_initialization_vector=
///     00000001,
///     00000010;
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Bare bit strings, one per line
    #[default]
    Text,
    /// Xilinx COE with radix header and `,`/`;` delimiters
    Coe,
}

impl Format {
    /// Appended to the input name to form the default output name.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Coe => "coe",
        }
    }

    /// Written once, before the first byte.
    pub fn header(&self) -> &'static str {
        match self {
            Format::Text => "",
            Format::Coe => COE_HEADER,
        }
    }

    /// Follows every line except the last.
    pub fn separator(&self) -> &'static str {
        match self {
            Format::Text => "",
            Format::Coe => ",",
        }
    }

    /// Follows the last line.
    pub fn terminator(&self) -> &'static str {
        match self {
            Format::Text => "",
            Format::Coe => ";",
        }
    }

    /// Whether a line's suffix depends on what comes after it.
    pub fn needs_lookahead(&self) -> bool {
        self.separator() != self.terminator()
    }

    /// Derives the output name by appending the extension to the whole input
    /// name, so `rom.bin` becomes `rom.bin.coe`.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_owned();
        name.push(".");
        name.push(self.extension());
        PathBuf::from(name)
    }
}
