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

//! Ready-made byte-to-text coders.

use super::alphabet::Alphabet;
use super::join::{Join, Normalize};
use super::padding::Padding;
use super::radix::Radix;
use super::radix2::Radix2;
use super::stage::{Chain, Codec, Coder};
use super::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::repeat;

/// Stages of an unpadded power-of-two coder.
pub type PlainStages = Chain<Radix2, Chain<Alphabet, Join>>;
/// Stages of a padded power-of-two coder.
pub type PaddedStages = Chain<Radix2, Chain<Alphabet, Chain<Padding, Join>>>;
/// Stages of an unpadded power-of-two coder with lenient decoding.
pub type NormalizedStages =
    Chain<Radix2, Chain<Alphabet, Chain<Join, Normalize>>>;
/// Stages of a base58 coder.
pub type Base58Stages = Chain<Radix, Chain<Alphabet, Join>>;

/// Uppercase base16 (RFC 4648).
pub static BASE16: Codec<PlainStages> = Codec::new(chain!(
    radix2!(4),
    alphabet!("0123456789ABCDEF"),
    join!(),
));

/// Base32 (RFC 4648), padded with `=`.
pub static BASE32: Codec<PaddedStages> = Codec::new(chain!(
    radix2!(5),
    alphabet!("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"),
    padding!(5),
    join!(),
));

/// Base32 with the RFC 4648 "extended hex" alphabet, padded with `=`.
pub static BASE32HEX: Codec<PaddedStages> = Codec::new(chain!(
    radix2!(5),
    alphabet!("0123456789ABCDEFGHIJKLMNOPQRSTUV"),
    padding!(5),
    join!(),
));

fn normalize_crockford(s: &str) -> Result<String> {
    Ok(s.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'O' => '0',
            'I' | 'L' => '1',
            c => c,
        })
        .collect())
}

/// Crockford's base32. Decoding ignores case and reads `O` as `0` and `I`
/// and `L` as `1`.
pub static BASE32CROCKFORD: Codec<NormalizedStages> = Codec::new(chain!(
    radix2!(5),
    alphabet!("0123456789ABCDEFGHJKMNPQRSTVWXYZ"),
    join!(),
    Normalize::new(normalize_crockford),
));

/// Base64 (RFC 4648), padded with `=`.
pub static BASE64: Codec<PaddedStages> = Codec::new(chain!(
    radix2!(6),
    alphabet!(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
    ),
    padding!(6),
    join!(),
));

/// URL-safe base64 (RFC 4648), padded with `=`.
pub static BASE64URL: Codec<PaddedStages> = Codec::new(chain!(
    radix2!(6),
    alphabet!(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"
    ),
    padding!(6),
    join!(),
));

/// Base58 with the Bitcoin alphabet.
pub static BASE58: Codec<Base58Stages> = Codec::new(chain!(
    radix!(58),
    alphabet!("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
    join!(),
));

/// Base58 with the Flickr alphabet.
pub static BASE58FLICKR: Codec<Base58Stages> = Codec::new(chain!(
    radix!(58),
    alphabet!("123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ"),
    join!(),
));

/// Base58 with the Ripple alphabet.
pub static BASE58XRP: Codec<Base58Stages> = Codec::new(chain!(
    radix!(58),
    alphabet!("rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz"),
    join!(),
));

fn normalize_hex(s: &str) -> Result<String> {
    if s.len() % 2 != 0 {
        return Err(Error::BadLength {
            len: s.len(),
            min: 0,
            max: None,
        });
    }
    Ok(s.to_ascii_lowercase())
}

/// Lowercase hexadecimal. Decoding accepts either case but requires an even
/// number of digits.
pub static HEX: Codec<NormalizedStages> = Codec::new(chain!(
    radix2!(4),
    alphabet!("0123456789abcdef"),
    join!(),
    Normalize::new(normalize_hex),
));

/// Treats bytes as UTF-8 text.
///
/// Encoding fails on invalid UTF-8 rather than substituting replacement
/// characters, so decoding always gives back the original bytes.
#[derive(Clone, Copy, Debug)]
pub struct Utf8;

impl Utf8 {
    pub fn encode(&self, bytes: &[u8]) -> Result<String> {
        core::str::from_utf8(bytes).map(String::from).map_err(|e| {
            Error::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }
        })
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

impl Coder for Utf8 {
    fn encode(&self, bytes: &[u8]) -> Result<String> {
        Utf8::encode(self, bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Utf8::decode(self, text)
    }
}

pub static UTF8: Utf8 = Utf8;

const XMR_BLOCK_BYTES: usize = 8;

/// Encoded length of a block, indexed by the block's length in bytes.
pub const XMR_BLOCK_LEN: [usize; XMR_BLOCK_BYTES + 1] =
    [0, 2, 3, 5, 6, 7, 9, 10, 11];

const XMR_FULL_BLOCK: usize = XMR_BLOCK_LEN[XMR_BLOCK_BYTES];

/// Monero's block-wise base58.
///
/// Every 8 bytes are encoded separately with [`BASE58`] and left-padded with
/// `1` to the width given by [`XMR_BLOCK_LEN`], so that each block has a
/// fixed size.
#[derive(Clone, Copy, Debug)]
pub struct Base58Xmr;

impl Base58Xmr {
    pub fn encode(&self, bytes: &[u8]) -> Result<String> {
        let blocks = bytes.len() / XMR_BLOCK_BYTES + 1;
        let mut res = String::with_capacity(blocks * XMR_FULL_BLOCK);
        for block in bytes.chunks(XMR_BLOCK_BYTES) {
            let encoded = BASE58.encode(block)?;
            let width = XMR_BLOCK_LEN[block.len()];
            res.extend(repeat('1').take(width.saturating_sub(encoded.len())));
            res.push_str(&encoded);
        }
        Ok(res)
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let symbols: Vec<char> = text.chars().collect();
        let blocks = symbols.len() / XMR_FULL_BLOCK + 1;
        let mut res = Vec::with_capacity(blocks * XMR_BLOCK_BYTES);
        for slice in symbols.chunks(XMR_FULL_BLOCK) {
            let block_len = XMR_BLOCK_LEN
                .iter()
                .position(|&n| n == slice.len())
                .ok_or(Error::BadBlockLength(slice.len()))?;
            let block = BASE58.decode(&slice.iter().collect::<String>())?;
            log::trace!(
                "base58xmr: {} symbols -> {} bytes ({} expected)",
                slice.len(),
                block.len(),
                block_len,
            );
            let extra = block.len().saturating_sub(block_len);
            if block[..extra].iter().any(|&b| b != 0) {
                return Err(Error::BadPadding("base58xmr: wrong padding"));
            }
            res.extend(repeat(0).take(block_len.saturating_sub(block.len())));
            res.extend_from_slice(&block[extra..]);
        }
        Ok(res)
    }
}

impl Coder for Base58Xmr {
    fn encode(&self, bytes: &[u8]) -> Result<String> {
        Base58Xmr::encode(self, bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Base58Xmr::decode(self, text)
    }
}

pub static BASE58XMR: Base58Xmr = Base58Xmr;
