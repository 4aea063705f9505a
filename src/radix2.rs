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

//! Bit repacking between power-of-two bases.

use super::stage::Stage;
use super::{Error, Result};
use alloc::vec::Vec;

const MAX_BITS: u32 = 32;

const fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Number of bits the accumulator must be able to hold when repacking
/// `from`-bit words into `to`-bit words.
pub const fn carry_bits(from: u32, to: u32) -> u32 {
    from + (to - gcd(from, to))
}

/// Repacks `from`-bit words into `to`-bit words, most significant bit first.
///
/// With `pad`, a final partial word is zero-filled and emitted. Without it,
/// leftover bits must be fewer than `from` and all zero.
pub fn convert_radix2(
    data: &[u32],
    from: u32,
    to: u32,
    pad: bool,
) -> Result<Vec<u32>> {
    if from == 0 || from > MAX_BITS {
        return Err(Error::InvalidArgument("convert_radix2: bad `from` width"));
    }
    if to == 0 || to > MAX_BITS {
        return Err(Error::InvalidArgument("convert_radix2: bad `to` width"));
    }
    if carry_bits(from, to) > MAX_BITS {
        return Err(Error::CarryOverflow("convert_radix2"));
    }

    // Accumulator; holds at most `MAX_BITS` live bits, so shifting by up to
    // 32 more can't overflow a `u64`.
    let mut carry = 0_u64;
    let mut pos = 0;
    let mask = (1_u64 << to) - 1;
    let limit = 1_u64 << from;
    let mut res =
        Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &word in data {
        if u64::from(word) >= limit {
            return Err(Error::DigitOutOfRange {
                digit: word,
                base: limit,
            });
        }
        if pos + from > MAX_BITS {
            return Err(Error::CarryOverflow("convert_radix2"));
        }
        carry = (carry << from) | u64::from(word);
        pos += from;
        while pos >= to {
            res.push(((carry >> (pos - to)) & mask) as u32);
            pos -= to;
        }
        carry &= (1 << pos) - 1;
    }

    let rest = (carry << (to - pos)) & mask;
    if !pad && pos >= from {
        return Err(Error::BadPadding("excess padding"));
    }
    if !pad && rest != 0 {
        return Err(Error::BadPadding("non-zero padding"));
    }
    if pad && pos > 0 {
        res.push(rest as u32);
    }
    Ok(res)
}

#[derive(Clone, Copy)]
enum WidthError {
    Range,
    Carry,
}

impl From<WidthError> for Error {
    fn from(e: WidthError) -> Self {
        match e {
            WidthError::Range => {
                Self::InvalidArgument("radix2: bits not in 1..=32")
            }
            WidthError::Carry => Self::CarryOverflow("radix2"),
        }
    }
}

const fn check_bits(bits: u32) -> Option<WidthError> {
    if bits == 0 || bits > MAX_BITS {
        return Some(WidthError::Range);
    }
    if carry_bits(8, bits) > MAX_BITS || carry_bits(bits, 8) > MAX_BITS {
        return Some(WidthError::Carry);
    }
    None
}

/// Bytes to `bits`-bit words.
///
/// Encoding zero-pads the final word and decoding rejects leftover bits,
/// unless the stage was created with reversed padding.
#[derive(Clone, Copy, Debug)]
pub struct Radix2 {
    bits: u32,
    rev_padding: bool,
}

impl Radix2 {
    /// Creates the stage, failing if `bits` isn't in `1..=32` or the
    /// accumulator would need more than 32 bits.
    pub fn new(bits: u32) -> Result<Self> {
        Self::with_rev_padding(bits, false)
    }

    /// Like [`Self::new`], but if `rev_padding` is true, encoding is strict
    /// and decoding pads instead.
    pub fn with_rev_padding(bits: u32, rev_padding: bool) -> Result<Self> {
        match check_bits(bits) {
            Some(err) => Err(err.into()),
            None => Ok(Self {
                bits,
                rev_padding,
            }),
        }
    }

    #[doc(hidden)]
    pub const fn __const(bits: u32, rev_padding: bool) -> Self {
        assert!(check_bits(bits).is_none(), "radix2: invalid width");
        Self {
            bits,
            rev_padding,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

/// Creates a [`Radix2`] stage, checking the width at compile time.
#[macro_export]
macro_rules! radix2 {
    ($bits:expr) => {
        $crate::radix2!($bits, false)
    };
    ($bits:expr, $rev_padding:expr) => {{
        const STAGE: $crate::radix2::Radix2 =
            $crate::radix2::Radix2::__const($bits, $rev_padding);
        STAGE
    }};
}

impl Stage for Radix2 {
    type Input = Vec<u8>;
    type Output = Vec<u32>;

    fn encode(&self, bytes: Vec<u8>) -> Result<Vec<u32>> {
        let data: Vec<u32> = bytes.into_iter().map(u32::from).collect();
        convert_radix2(&data, 8, self.bits, !self.rev_padding)
    }

    fn decode(&self, words: Vec<u32>) -> Result<Vec<u8>> {
        let bytes = convert_radix2(&words, self.bits, 8, self.rev_padding)?;
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::vec;

    #[test]
    fn splits_bytes_into_words() {
        let words = convert_radix2(&[0xde, 0xad], 8, 4, true).unwrap();
        assert_eq!(words, vec![0xd, 0xe, 0xa, 0xd]);
        // 0b11111111 -> 11111 111(00)
        let words = convert_radix2(&[0xff], 8, 5, true).unwrap();
        assert_eq!(words, vec![31, 28]);
        let bytes = convert_radix2(&[31, 28], 5, 8, false).unwrap();
        assert_eq!(bytes, vec![0xff]);
    }

    #[test]
    fn strict_mode_rejects_leftovers() {
        let err = convert_radix2(&[31, 29], 5, 8, false).unwrap_err();
        assert_eq!(err, Error::BadPadding("non-zero padding"));
        // Two 5-bit words leave 2 bits; a third leaves 7 >= 5.
        let err = convert_radix2(&[31, 28, 0], 5, 8, false).unwrap_err();
        assert_eq!(err, Error::BadPadding("excess padding"));
    }

    #[test]
    fn rejects_wide_words() {
        let err = convert_radix2(&[16], 4, 8, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    #[test]
    fn checks_widths() {
        for bits in [0, 33] {
            let err = Radix2::new(bits).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
        }
        let err = Radix2::new(31).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OverflowGuard);
        for bits in [1, 2, 4, 5, 6, 8, 16, 24, 32] {
            assert!(Radix2::new(bits).is_ok(), "{} bits", bits);
        }
        let err = convert_radix2(&[], 31, 8, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OverflowGuard);
    }

    #[test]
    fn full_width_words() {
        let stage = radix2!(32);
        let words = stage.encode(vec![0xff, 0, 0, 1, 2]).unwrap();
        assert_eq!(words, vec![0xff00_0001, 0x0200_0000]);
        // Whole words carry no leftover bits, so the zero fill comes back.
        assert_eq!(
            stage.decode(words).unwrap(),
            vec![0xff, 0, 0, 1, 2, 0, 0, 0],
        );
        let words = stage.encode(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(stage.decode(words).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reversed_padding() {
        let stage = radix2!(5, true);
        assert!(stage.encode(vec![0xff]).is_err());
        assert_eq!(stage.decode(vec![31, 28]).unwrap(), vec![0xff, 0]);
    }
}
