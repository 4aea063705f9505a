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

//! The [`Stage`] trait and the combinators that join stages together.

use super::Result;
use alloc::string::String;
use alloc::vec::Vec;

/// One reversible step of an encoding pipeline.
///
/// [`Self::encode`] turns an [`Input`](Self::Input) into an
/// [`Output`](Self::Output); [`Self::decode`] is its inverse.
pub trait Stage {
    type Input;
    type Output;

    fn encode(&self, input: Self::Input) -> Result<Self::Output>;
    fn decode(&self, output: Self::Output) -> Result<Self::Input>;
}

/// Two stages run one after the other.
///
/// Encoding runs `first` and then `second`; decoding runs `second`'s inverse
/// and then `first`'s. An error from either stage is returned as-is.
#[derive(Clone, Copy, Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
        }
    }
}

impl<A, B> Stage for Chain<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn encode(&self, input: Self::Input) -> Result<Self::Output> {
        self.second.encode(self.first.encode(input)?)
    }

    fn decode(&self, output: Self::Output) -> Result<Self::Input> {
        self.first.decode(self.second.decode(output)?)
    }
}

/// Builds a [`Chain`] out of a list of stages, first stage first.
///
/// ```
/// use polybase::{alphabet, chain, join, radix2};
/// use polybase::stage::Stage;
///
/// let hex = chain!(radix2!(4), alphabet!("0123456789abcdef"), join!());
/// assert_eq!(hex.encode(vec![0xbe, 0xef]).unwrap(), "beef");
/// ```
#[macro_export]
macro_rules! chain {
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::stage::Chain::new($first, $crate::chain!($($rest),+))
    };
}

/// A byte-to-text coder.
///
/// Implemented by every named coder so they can be stored together in the
/// [registry](crate::registry).
pub trait Coder {
    fn encode(&self, bytes: &[u8]) -> Result<String>;
    fn decode(&self, text: &str) -> Result<Vec<u8>>;
}

/// Wraps a bytes-to-string [`Stage`] pipeline as a [`Coder`].
#[derive(Clone, Copy, Debug)]
pub struct Codec<S>(S);

impl<S> Codec<S> {
    pub const fn new(stages: S) -> Self {
        Self(stages)
    }

    /// The wrapped pipeline.
    pub fn stages(&self) -> &S {
        &self.0
    }
}

impl<S> Codec<S>
where
    S: Stage<Input = Vec<u8>, Output = String>,
{
    /// Encodes `bytes` as text.
    pub fn encode(&self, bytes: &[u8]) -> Result<String> {
        self.0.encode(bytes.to_vec())
    }

    /// Decodes `text` back into bytes.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        self.0.decode(String::from(text))
    }
}

impl<S> Coder for Codec<S>
where
    S: Stage<Input = Vec<u8>, Output = String>,
{
    fn encode(&self, bytes: &[u8]) -> Result<String> {
        Codec::encode(self, bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Codec::decode(self, text)
    }
}
