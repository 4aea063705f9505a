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

//! Conversion between arbitrary bases, for alphabets whose length isn't a
//! power of two.

use super::stage::Stage;
use super::{Error, Result};
use alloc::vec::Vec;

const BYTE_BASE: u32 = 1 << 8;
const MAX_EXACT: u64 = 1 << 53;

/// Re-expresses `data`, a big-endian number in base `from`, in base `to`.
///
/// Each leading zero digit of `data` becomes one leading zero digit of the
/// result, so the output is not necessarily minimal. Fails with
/// [`Error::CarryOverflow`] if an intermediate value exceeds
/// 2<sup>53</sup>, the largest integer a double holds exactly.
pub fn convert_radix(data: &[u32], from: u32, to: u32) -> Result<Vec<u32>> {
    if from < 2 {
        return Err(Error::InvalidArgument("convert_radix: `from` below 2"));
    }
    if to < 2 {
        return Err(Error::InvalidArgument("convert_radix: `to` below 2"));
    }
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(&digit) = data.iter().find(|&&d| d >= from) {
        return Err(Error::DigitOutOfRange {
            digit,
            base: from.into(),
        });
    }

    let mut digits = data.to_vec();
    let mut res = Vec::new();
    // Index of the first digit of the quotient that may still be nonzero.
    let mut pos = 0;
    loop {
        let mut carry = 0_u64;
        let mut done = true;
        for i in pos..digits.len() {
            // `carry < to`, so this can't overflow a `u64`.
            let value = u64::from(from) * carry + u64::from(digits[i]);
            if value > MAX_EXACT {
                return Err(Error::CarryOverflow("convert_radix"));
            }
            carry = value % u64::from(to);
            // Less than `from`, as `value < from * to`.
            digits[i] = (value / u64::from(to)) as u32;
            if !done {
                continue;
            }
            if digits[i] == 0 {
                pos = i;
            } else {
                done = false;
            }
        }
        res.push(carry as u32);
        if done {
            break;
        }
    }

    let zeros = data[..data.len() - 1].iter().take_while(|&&d| d == 0);
    res.extend(zeros.map(|_| 0));
    res.reverse();
    Ok(res)
}

/// Bytes to digits in base `n`, by repeated division.
#[derive(Clone, Copy, Debug)]
pub struct Radix {
    base: u32,
}

impl Radix {
    /// Creates the stage, failing if `base` is less than 2.
    pub fn new(base: u32) -> Result<Self> {
        match base {
            0 | 1 => Err(Error::InvalidArgument("radix: base below 2")),
            _ => Ok(Self {
                base,
            }),
        }
    }

    #[doc(hidden)]
    pub const fn __const(base: u32) -> Self {
        assert!(base >= 2, "radix: base below 2");
        Self {
            base,
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}

/// Creates a [`Radix`] stage, checking `base` at compile time.
#[macro_export]
macro_rules! radix {
    ($base:expr) => {{
        const STAGE: $crate::radix::Radix =
            $crate::radix::Radix::__const($base);
        STAGE
    }};
}

impl Stage for Radix {
    type Input = Vec<u8>;
    type Output = Vec<u32>;

    fn encode(&self, bytes: Vec<u8>) -> Result<Vec<u32>> {
        let data: Vec<u32> = bytes.into_iter().map(u32::from).collect();
        convert_radix(&data, BYTE_BASE, self.base)
    }

    fn decode(&self, digits: Vec<u32>) -> Result<Vec<u8>> {
        let bytes = convert_radix(&digits, self.base, BYTE_BASE)?;
        // Every digit in base 256 fits in a byte.
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }
}
