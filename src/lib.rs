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

//! Composable binary-to-text codecs.
//!
//! Each coder is a [`Codec`] built by [chaining](chain!) small reversible
//! [`Stage`]s: a radix or bit-width converter, an [alphabet](alphabet!),
//! optional [padding](padding!) and a [join](join!). The usual encodings
//! are predefined in [`coders`], and [`bech32`] layers a checksummed,
//! human-readable prefix on top of the same stages.
//!
//! ```
//! use polybase::{BASE58, BASE64, HEX};
//!
//! assert_eq!(BASE64.encode(b"Man").unwrap(), "TWFu");
//! assert_eq!(BASE58.encode(&[0, 0, 0x61]).unwrap(), "112g");
//! assert_eq!(HEX.decode("DEADbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

mod error;

#[macro_use]
pub mod stage;
#[macro_use]
pub mod radix;
#[macro_use]
pub mod radix2;
#[macro_use]
pub mod alphabet;
#[macro_use]
pub mod padding;
#[macro_use]
pub mod join;

pub mod bech32;
pub mod coders;
pub mod registry;

pub use error::{Error, ErrorKind, Result};
pub use stage::{Chain, Codec, Coder, Stage};

pub use radix::convert_radix;
pub use radix2::convert_radix2;

pub use bech32::{Bech32, Bech32Config, BECH32, BECH32M};
pub use coders::{BASE16, BASE32, BASE32CROCKFORD, BASE32HEX};
pub use coders::{BASE58, BASE58FLICKR, BASE58XMR, BASE58XRP};
pub use coders::{BASE64, BASE64URL, HEX, UTF8};

pub use registry::{bytes_to_string, lookup, string_to_bytes};
