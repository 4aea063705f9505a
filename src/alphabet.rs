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

/// Maps digits to the characters of an alphabet and back.
///
/// The alphabet must be at least two distinct ASCII characters; the digit for
/// a character is its position in the alphabet.
#[derive(Clone, Copy, Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
}

const fn check(symbols: &[u8]) -> Option<&'static str> {
    if symbols.len() < 2 {
        return Some("alphabet: fewer than two symbols");
    }
    let mut i = 0;
    while i < symbols.len() {
        if !symbols[i].is_ascii() {
            return Some("alphabet: non-ASCII symbol");
        }
        let mut j = i + 1;
        while j < symbols.len() {
            if symbols[i] == symbols[j] {
                return Some("alphabet: repeated symbol");
            }
            j += 1;
        }
        i += 1;
    }
    None
}

impl Alphabet {
    pub fn new(symbols: &'static str) -> Result<Self> {
        match check(symbols.as_bytes()) {
            Some(msg) => Err(Error::InvalidArgument(msg)),
            None => Ok(Self {
                symbols: symbols.as_bytes(),
            }),
        }
    }

    #[doc(hidden)]
    pub const fn __const(symbols: &'static str) -> Self {
        assert!(check(symbols.as_bytes()).is_none(), "invalid alphabet");
        Self {
            symbols: symbols.as_bytes(),
        }
    }

    /// Number of symbols, which is the base of the digits this stage maps.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; alphabets have at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, digit: u32) -> Result<char> {
        self.symbols.get(digit as usize).map(|&b| char::from(b)).ok_or(
            Error::DigitOutOfRange {
                digit,
                base: self.symbols.len() as u64,
            },
        )
    }

    pub fn digit(&self, symbol: char) -> Result<u32> {
        u8::try_from(symbol)
            .ok()
            .and_then(|b| self.symbols.iter().position(|&s| s == b))
            .map(|i| i as u32)
            .ok_or(Error::UnknownSymbol(symbol))
    }
}

/// Creates an [`Alphabet`] stage, checking it at compile time.
#[macro_export]
macro_rules! alphabet {
    ($symbols:expr) => {{
        const STAGE: $crate::alphabet::Alphabet =
            $crate::alphabet::Alphabet::__const($symbols);
        STAGE
    }};
}

impl Stage for Alphabet {
    type Input = Vec<u32>;
    type Output = Vec<char>;

    fn encode(&self, digits: Vec<u32>) -> Result<Vec<char>> {
        digits.into_iter().map(|d| self.symbol(d)).collect()
    }

    fn decode(&self, symbols: Vec<char>) -> Result<Vec<u32>> {
        symbols.into_iter().map(|c| self.digit(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::vec;

    #[test]
    fn maps_both_ways() {
        let abc = alphabet!("abc");
        assert_eq!(abc.encode(vec![2, 0, 1]).unwrap(), vec!['c', 'a', 'b']);
        assert_eq!(abc.decode(vec!['b', 'c']).unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_out_of_range() {
        let abc = alphabet!("abc");
        let err = abc.encode(vec![0, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::DigitOutOfRange {
                digit: 3,
                base: 3,
            },
        );
        let err = abc.decode(vec!['a', 'd']).unwrap_err();
        assert_eq!(err, Error::UnknownSymbol('d'));
        let err = abc.decode(vec!['é']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    }

    #[test]
    fn validates_symbols() {
        assert!(Alphabet::new("a").is_err());
        assert!(Alphabet::new("abca").is_err());
        assert!(Alphabet::new("aé").is_err());
        assert_eq!(Alphabet::new("01").unwrap().len(), 2);
    }
}
