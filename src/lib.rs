// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
pub mod cli;
pub mod convert;
pub mod error;
pub mod expand;
pub mod format;

pub use error::{Error, StreamError, WidthError};
pub use expand::BitWidth;
pub use format::Format;

/// Settings for a single conversion. Built once from the command line and
/// passed by reference to everything that needs it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub width: BitWidth,
    pub format: Format,
}

impl Options {
    /// Create a new `Options` object.
    pub fn new(width: BitWidth, format: Format) -> Self {
        Self { width, format }
    }
}
