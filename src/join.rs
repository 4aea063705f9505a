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

//! The string end of a pipeline: joining symbols and normalizing input.

use super::stage::Stage;
use super::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;

/// Concatenates symbols into a string, optionally with a separator.
#[derive(Clone, Copy, Debug)]
pub struct Join {
    separator: &'static str,
}

impl Join {
    pub const fn new() -> Self {
        Self::with_separator("")
    }

    pub const fn with_separator(separator: &'static str) -> Self {
        Self {
            separator,
        }
    }
}

impl Default for Join {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a [`Join`] stage.
#[macro_export]
macro_rules! join {
    () => {
        $crate::join::Join::new()
    };
    ($separator:expr) => {
        $crate::join::Join::with_separator($separator)
    };
}

impl Stage for Join {
    type Input = Vec<char>;
    type Output = String;

    fn encode(&self, symbols: Vec<char>) -> Result<String> {
        let mut s = String::with_capacity(
            symbols.len() * (1 + self.separator.len()),
        );
        for (i, c) in symbols.into_iter().enumerate() {
            if i > 0 {
                s.push_str(self.separator);
            }
            s.push(c);
        }
        Ok(s)
    }

    fn decode(&self, s: String) -> Result<Vec<char>> {
        if self.separator.is_empty() {
            return Ok(s.chars().collect());
        }
        if s.is_empty() {
            return Ok(Vec::new());
        }
        s.split(self.separator)
            .map(|piece| {
                let mut chars = piece.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(Error::BadSymbol(piece.into())),
                }
            })
            .collect()
    }
}

/// Applies a transformation to input before decoding it.
///
/// Encoding passes strings through unchanged, so output stays in its
/// canonical form while decoding can accept variants of it.
#[derive(Clone, Copy)]
pub struct Normalize {
    f: fn(&str) -> Result<String>,
}

impl Normalize {
    pub const fn new(f: fn(&str) -> Result<String>) -> Self {
        Self {
            f,
        }
    }
}

impl core::fmt::Debug for Normalize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Normalize").finish_non_exhaustive()
    }
}

impl Stage for Normalize {
    type Input = String;
    type Output = String;

    fn encode(&self, s: String) -> Result<String> {
        Ok(s)
    }

    fn decode(&self, s: String) -> Result<String> {
        (self.f)(&s)
    }
}
