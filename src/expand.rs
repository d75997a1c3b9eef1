// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::fmt::{self, Display, Formatter};
use std::io::{BufReader, Read, Write};
use std::num::IntErrorKind;
use std::str::FromStr;

use itertools::put_back;
use log::trace;

use crate::error::{StreamError, WidthError};
use crate::format::LINE_ENDING;
use crate::Options;

/// The number of most significant bits emitted for every input byte.
///
/// Always in `1..=8`. Wider requests are clamped rather than rejected, zero
/// is never representable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u8);

impl BitWidth {
    pub const MAX: BitWidth = BitWidth(8);
    pub const DEFAULT: BitWidth = Self::MAX;

    /// Returns `None` for zero, clamps anything above 8.
    pub fn new(bits: u32) -> Option<Self> {
        match bits {
            0 => None,
            b if b >= Self::MAX.0 as u32 => Some(Self::MAX),
            b => Some(BitWidth(b as u8)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for BitWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BitWidth {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<BitWidth, WidthError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WidthError::NotANumber(s.to_string()));
        }

        let bits = match s.parse::<u32>() {
            Ok(bits) => bits,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
            Err(_) => return Err(WidthError::NotANumber(s.to_string())),
        };

        BitWidth::new(bits).ok_or(WidthError::Zero)
    }
}

/// Renders the top `width` bits of `byte`, most significant first.
pub fn bit_string(byte: u8, width: BitWidth) -> String {
    let mut bits = String::with_capacity(width.get() as usize);
    let mut mask = 0x80u8;

    for _ in 0..width.get() {
        bits.push(if byte & mask != 0 { '1' } else { '0' });
        mask >>= 1;
    }

    bits
}

/// Converts every byte of `reader` into one line of `writer`, returning the
/// number of bytes converted.
///
/// The input is read once, in order. When the format ends its last line
/// differently from the others, one byte is read ahead and put back to find
/// out whether the current byte is the last one.
pub fn expand<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    options: &Options,
) -> Result<usize, StreamError> {
    let format = options.format;
    let lookahead = format.needs_lookahead();
    let mut emit = |text: &str| writer.write_all(text.as_bytes()).map_err(StreamError::Write);

    emit(format.header())?;

    let mut bytes = put_back(BufReader::new(reader).bytes());
    let mut count = 0;

    while let Some(byte) = bytes.next() {
        let byte = byte.map_err(StreamError::Read)?;
        emit(&bit_string(byte, options.width))?;

        if lookahead {
            let suffix = match bytes.next() {
                Some(next) => {
                    bytes.put_back(next);
                    format.separator()
                }
                None => format.terminator(),
            };
            emit(suffix)?;
        }

        emit(LINE_ENDING)?;
        count += 1;
    }

    writer.flush().map_err(StreamError::Write)?;
    trace!("expanded {} bytes", count);

    Ok(count)
}
