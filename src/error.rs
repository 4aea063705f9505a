/*
 * Copyright (C) 2026 The polybase developers
 *
 * This file is part of polybase.
 *
 * polybase is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * polybase is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with polybase. If not, see <https://www.gnu.org/licenses/>.
 */

use alloc::string::String;
use core::fmt::{self, Display, Formatter};

/// An error encountered by a stage or coder.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A stage was built or called with an argument it can't accept.
    InvalidArgument(&'static str),
    /// No coder is registered under the given name.
    UnknownEncoding(String),
    /// The input to the UTF-8 coder was not valid UTF-8.
    InvalidUtf8 {
        /// Number of leading bytes that were valid.
        valid_up_to: usize,
    },
    /// A digit was not smaller than its base.
    DigitOutOfRange {
        /// The offending digit.
        digit: u32,
        /// The base (or alphabet length) it should be smaller than.
        base: u64,
    },
    /// A bech32 prefix contained a character outside of ASCII 33–126.
    PrefixOutOfRange(char),
    /// Intermediate arithmetic would no longer be exact.
    CarryOverflow(&'static str),
    /// Padding was missing, misplaced, excessive or nonzero.
    BadPadding(&'static str),
    /// The trailing bech32 checksum did not match.
    ChecksumMismatch {
        /// The checksum that was expected for the prefix and payload.
        expected: String,
    },
    /// The bech32 separator `1` was missing or began the string.
    MissingSeparator,
    /// The input mixed upper- and lowercase letters.
    MixedCase,
    /// The input was not an acceptable length.
    BadLength {
        /// The actual length.
        len: usize,
        /// The smallest acceptable length.
        min: usize,
        /// The largest acceptable length, if any.
        max: Option<usize>,
    },
    /// A base58xmr block had a length no 8-byte block encodes to.
    BadBlockLength(usize),
    /// A character was not part of the alphabet.
    UnknownSymbol(char),
    /// A separator-joined piece was not exactly one character.
    BadSymbol(String),
}

/// Alias of <code>[Result](core::result::Result)\<T, [Error]></code>.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input or configuration had the wrong shape.
    InvalidArgumentType,
    /// A digit, word or character exceeded its allowed range.
    ValueOutOfRange,
    /// Radix or bit-packing arithmetic would lose precision.
    OverflowGuard,
    /// Too much, too little or misplaced padding.
    MalformedPadding,
    /// A checksum did not verify.
    ChecksumMismatch,
    /// Separator, case or length rules were violated.
    StructuralFormat,
    /// A character was absent from the alphabet.
    UnknownSymbol,
}

impl Error {
    /// Returns the broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_)
            | Self::UnknownEncoding(_)
            | Self::InvalidUtf8 { .. } => ErrorKind::InvalidArgumentType,
            Self::DigitOutOfRange { .. } | Self::PrefixOutOfRange(_) => {
                ErrorKind::ValueOutOfRange
            }
            Self::CarryOverflow(_) => ErrorKind::OverflowGuard,
            Self::BadPadding(_) => ErrorKind::MalformedPadding,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Self::MissingSeparator
            | Self::MixedCase
            | Self::BadLength { .. }
            | Self::BadBlockLength(_) => ErrorKind::StructuralFormat,
            Self::UnknownSymbol(_) | Self::BadSymbol(_) => {
                ErrorKind::UnknownSymbol
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
            Self::UnknownEncoding(name) => {
                write!(
                    f,
                    "invalid encoding type {:?}; available types:",
                    name,
                )?;
                for (i, name) in crate::registry::names().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{}{}", sep, name)?;
                }
                Ok(())
            }
            Self::InvalidUtf8 {
                valid_up_to,
            } => write!(f, "invalid UTF-8 after byte {}", valid_up_to),
            Self::DigitOutOfRange {
                digit,
                base,
            } => write!(f, "digit {} out of range for base {}", digit, base),
            Self::PrefixOutOfRange(c) => {
                write!(f, "bad prefix character: {:?}", c)
            }
            Self::CarryOverflow(ctx) => write!(f, "{}: carry overflow", ctx),
            Self::BadPadding(msg) => write!(f, "invalid padding: {}", msg),
            Self::ChecksumMismatch {
                expected,
            } => write!(f, "invalid checksum: expected {:?}", expected),
            Self::MissingSeparator => write!(
                f,
                "separator '1' must be present between prefix and data",
            ),
            Self::MixedCase => {
                write!(f, "string must be all lowercase or all uppercase")
            }
            Self::BadLength {
                len,
                min,
                max: Some(max),
            } => write!(f, "bad length {} (expected {}..={})", len, min, max),
            Self::BadLength {
                len,
                min,
                max: None,
            } => write!(f, "bad length {} (expected at least {})", len, min),
            Self::BadBlockLength(len) => {
                write!(f, "bad block length: {} symbols", len)
            }
            Self::UnknownSymbol(c) => write!(f, "unknown symbol: {:?}", c),
            Self::BadSymbol(s) => {
                write!(f, "expected a single character, got {:?}", s)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
