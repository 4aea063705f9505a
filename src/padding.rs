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

use super::stage::Stage;
use super::{Error, Result};
use alloc::vec::Vec;

/// Pads symbols so that they describe a whole number of bytes.
#[derive(Clone, Copy, Debug)]
pub struct Padding {
    bits: usize,
    chr: char,
}

impl Padding {
    /// `bits` is the number of bits each symbol stands for.
    pub const fn new(bits: usize) -> Self {
        Self::with_char(bits, '=')
    }

    pub const fn with_char(bits: usize, chr: char) -> Self {
        Self {
            bits,
            chr,
        }
    }

    fn whole_bytes(&self, len: usize) -> bool {
        len * self.bits % 8 == 0
    }
}

/// Creates a [`Padding`] stage.
#[macro_export]
macro_rules! padding {
    ($bits:expr) => {
        $crate::padding::Padding::new($bits)
    };
    ($bits:expr, $chr:expr) => {
        $crate::padding::Padding::with_char($bits, $chr)
    };
}

impl Stage for Padding {
    type Input = Vec<char>;
    type Output = Vec<char>;

    fn encode(&self, mut symbols: Vec<char>) -> Result<Vec<char>> {
        while !self.whole_bytes(symbols.len()) {
            symbols.push(self.chr);
        }
        Ok(symbols)
    }

    fn decode(&self, mut symbols: Vec<char>) -> Result<Vec<char>> {
        if !self.whole_bytes(symbols.len()) {
            return Err(Error::BadPadding("not a whole number of bytes"));
        }
        while symbols.last() == Some(&self.chr) {
            symbols.pop();
            // The pad we just removed sat right after a byte boundary.
            if self.whole_bytes(symbols.len()) {
                return Err(Error::BadPadding("too much padding"));
            }
        }
        Ok(symbols)
    }
}
