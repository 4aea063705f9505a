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

//! Bech32 (BIP 173) and bech32m (BIP 350).
//!
//! A bech32 string is a human-readable prefix, the separator `1`, a payload
//! of 5-bit words and a six-word checksum over both.

use super::alphabet::Alphabet;
use super::join::Join;
use super::radix2::convert_radix2;
use super::stage::{Chain, Stage};
use super::{Error, Result};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

const SEPARATOR: char = '1';
const CHECKSUM_WORDS: usize = 6;
const MIN_LEN: usize = 8;

/// Length limit applied when no other is configured.
pub const DEFAULT_LIMIT: usize = 90;

const GENERATORS: [u32; 5] =
    [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

static CHARSET: Chain<Alphabet, Join> =
    chain!(alphabet!("qpzry9x8gf2tvdw0s3jn54khce6mua7l"), join!());

/// Which of the two checksum constants to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP 173.
    Bech32,
    /// BIP 350.
    Bech32m,
}

impl Variant {
    /// The value the final checksum state is XORed with.
    pub const fn constant(self) -> u32 {
        match self {
            Self::Bech32 => 1,
            Self::Bech32m => 0x2bc830a3,
        }
    }
}

fn polymod_step(pre: u32) -> u32 {
    let top = pre >> 25;
    let mut chk = (pre & 0x1ff_ffff) << 5;
    for (i, gen) in GENERATORS.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            chk ^= gen;
        }
    }
    chk
}

fn check_prefix(prefix: &str) -> Result<()> {
    match prefix.chars().find(|c| !('!'..='~').contains(c)) {
        Some(c) => Err(Error::PrefixOutOfRange(c)),
        None => Ok(()),
    }
}

/// Computes the six checksum symbols for an already-validated prefix.
fn checksum(prefix: &str, words: &[u8], variant: Variant) -> Result<String> {
    let mut chk = 1;
    for b in prefix.bytes() {
        chk = polymod_step(chk) ^ u32::from(b >> 5);
    }
    chk = polymod_step(chk);
    for b in prefix.bytes() {
        chk = polymod_step(chk) ^ u32::from(b & 0x1f);
    }
    for &word in words {
        chk = polymod_step(chk) ^ u32::from(word);
    }
    for _ in 0..CHECKSUM_WORDS {
        chk = polymod_step(chk);
    }
    chk ^= variant.constant();
    let sum = (0..CHECKSUM_WORDS as u32)
        .rev()
        .map(|i| (chk >> (5 * i)) & 0x1f)
        .collect();
    CHARSET.encode(sum)
}

/// Used by the `*_with` methods of [`Bech32`] to configure length checks.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct Bech32Config {
    /// Maximum length of the whole string, or `None` for no limit.
    /// [default: `Some(90)`]
    pub limit: Option<usize>,
}

impl Bech32Config {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
        }
    }

    /// A configuration without a length limit.
    pub const fn unlimited() -> Self {
        Self {
            limit: None,
        }
    }
}

impl Default for Bech32Config {
    fn default() -> Self {
        Self::new()
    }
}

/// A successfully decoded bech32 string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The prefix, in lowercase.
    pub prefix: String,
    /// The payload words, without the checksum.
    pub words: Vec<u8>,
}

/// A decoded bech32 string whose payload has also been unpacked to bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBytes {
    pub prefix: String,
    pub words: Vec<u8>,
    pub bytes: Vec<u8>,
}

/// A bech32 encoder/decoder for one checksum [`Variant`].
#[derive(Clone, Copy, Debug)]
pub struct Bech32 {
    variant: Variant,
}

/// Bech32 with the original BIP 173 checksum.
pub static BECH32: Bech32 = Bech32::new(Variant::Bech32);

/// Bech32m.
pub static BECH32M: Bech32 = Bech32::new(Variant::Bech32m);

impl Bech32 {
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encodes `prefix` and `words` with the default length limit.
    pub fn encode(&self, prefix: &str, words: &[u8]) -> Result<String> {
        self.encode_with(prefix, words, Bech32Config::new())
    }

    /// Encodes `prefix` and `words` with the given config.
    ///
    /// The prefix is lowercased. Every word must be smaller than 32.
    pub fn encode_with(
        &self,
        prefix: &str,
        words: &[u8],
        config: Bech32Config,
    ) -> Result<String> {
        if prefix.is_empty() {
            return Err(Error::InvalidArgument("bech32: empty prefix"));
        }
        let len = prefix.chars().count() + 1 + words.len() + CHECKSUM_WORDS;
        if let Some(limit) = config.limit.filter(|&limit| len > limit) {
            return Err(Error::BadLength {
                len,
                min: MIN_LEN,
                max: Some(limit),
            });
        }
        let prefix = prefix.to_ascii_lowercase();
        check_prefix(&prefix)?;
        let digits = words.iter().copied().map(u32::from).collect();
        let payload = CHARSET.encode(digits)?;
        let sum = checksum(&prefix, words, self.variant)?;
        Ok(format!("{}{}{}{}", prefix, SEPARATOR, payload, sum))
    }

    /// Decodes `s` with the default length limit.
    pub fn decode(&self, s: &str) -> Result<Decoded> {
        self.decode_with(s, Bech32Config::new())
    }

    /// Decodes `s` with the given config.
    pub fn decode_with(
        &self,
        s: &str,
        config: Bech32Config,
    ) -> Result<Decoded> {
        let len = s.chars().count();
        if len < MIN_LEN || config.limit.map_or(false, |limit| len > limit) {
            return Err(Error::BadLength {
                len,
                min: MIN_LEN,
                max: config.limit,
            });
        }
        let lowered = s.to_ascii_lowercase();
        if s != lowered && s != s.to_ascii_uppercase() {
            return Err(Error::MixedCase);
        }

        let sep = match lowered.rfind(SEPARATOR) {
            None | Some(0) => return Err(Error::MissingSeparator),
            Some(i) => i,
        };
        let prefix = &lowered[..sep];
        let data = &lowered[sep + 1..];
        check_prefix(prefix)?;
        let data_len = data.chars().count();
        if data_len < CHECKSUM_WORDS {
            return Err(Error::BadLength {
                len: data_len,
                min: CHECKSUM_WORDS,
                max: None,
            });
        }

        let digits = CHARSET.decode(String::from(data))?;
        let words: Vec<u8> = digits[..digits.len() - CHECKSUM_WORDS]
            .iter()
            .map(|&d| d as u8)
            .collect();
        let expected = checksum(prefix, &words, self.variant)?;
        if !data.ends_with(&expected) {
            return Err(Error::ChecksumMismatch {
                expected,
            });
        }
        Ok(Decoded {
            prefix: prefix.into(),
            words,
        })
    }

    /// Like [`Self::decode`], but returns [`None`] instead of an error.
    pub fn decode_opt(&self, s: &str) -> Option<Decoded> {
        self.decode(s)
            .map_err(|e| log::debug!("bech32: discarding {:?}: {}", s, e))
            .ok()
    }

    /// Decodes `s` without a length limit and unpacks its payload to bytes.
    pub fn decode_to_bytes(&self, s: &str) -> Result<DecodedBytes> {
        let Decoded {
            prefix,
            words,
        } = self.decode_with(s, Bech32Config::unlimited())?;
        let bytes = self.from_words(&words)?;
        Ok(DecodedBytes {
            prefix,
            words,
            bytes,
        })
    }

    /// Splits bytes into 5-bit words, zero-padding the last one.
    pub fn to_words(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let data: Vec<u32> = bytes.iter().copied().map(u32::from).collect();
        let words = convert_radix2(&data, 8, 5, true)?;
        Ok(words.into_iter().map(|w| w as u8).collect())
    }

    /// Joins 5-bit words back into bytes. Leftover bits must be zero.
    pub fn from_words(&self, words: &[u8]) -> Result<Vec<u8>> {
        let data: Vec<u32> = words.iter().copied().map(u32::from).collect();
        let bytes = convert_radix2(&data, 5, 8, false)?;
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }

    /// Like [`Self::from_words`], but returns [`None`] instead of an error.
    pub fn from_words_opt(&self, words: &[u8]) -> Option<Vec<u8>> {
        self.from_words(words).ok()
    }
}
