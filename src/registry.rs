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

//! Byte-to-text coders looked up by name.

use super::coders::*;
use super::stage::Coder;
use super::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;

/// A coder that can be shared between threads.
pub type SharedCoder = &'static (dyn Coder + Sync);

/// Every named coder, in the order they are listed to users.
pub static CODERS: [(&str, SharedCoder); 12] = [
    ("utf8", &UTF8),
    ("hex", &HEX),
    ("base16", &BASE16),
    ("base32", &BASE32),
    ("base32hex", &BASE32HEX),
    ("base32crockford", &BASE32CROCKFORD),
    ("base64", &BASE64),
    ("base64url", &BASE64URL),
    ("base58", &BASE58),
    ("base58flickr", &BASE58FLICKR),
    ("base58xrp", &BASE58XRP),
    ("base58xmr", &BASE58XMR),
];

/// Names of all registered coders.
pub fn names() -> impl Iterator<Item = &'static str> {
    CODERS.iter().map(|&(name, _)| name)
}

/// Finds the coder registered as `name`.
pub fn lookup(name: &str) -> Result<SharedCoder> {
    let found = CODERS.iter().find(|&&(n, _)| n == name);
    log::trace!("registry: {:?} {}", name, match found {
        Some(_) => "found",
        None => "not found",
    });
    found
        .map(|&(_, coder)| coder)
        .ok_or_else(|| Error::UnknownEncoding(name.into()))
}

/// Encodes `bytes` with the coder named `name`.
pub fn bytes_to_string(name: &str, bytes: &[u8]) -> Result<String> {
    lookup(name)?.encode(bytes)
}

/// Decodes `text` with the coder named `name`.
pub fn string_to_bytes(name: &str, text: &str) -> Result<Vec<u8>> {
    lookup(name)?.decode(text)
}
