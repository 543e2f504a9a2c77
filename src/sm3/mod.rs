//! The SM3 hash, GB/T 32905-2016.

mod generic;
pub(crate) mod util;

pub use generic::{compress_block as compress, expand};
use generic::compress_generic;
pub use util::{p0, p1};

use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Input, Result};

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 32;

/// The longest message whose bit length still fits the 64 bits length field.
pub const MAX_MESSAGE_LEN: u64 = (1 << 61) - 1;

pub const IV: [u32; 8] = [0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e];

#[inline]
fn too_long(actual: u64) -> Error {
    tracing::debug!(actual, max = MAX_MESSAGE_LEN, "rejected SM3 message length");
    Error::InvalidLength { input: Input::Message, expected: MAX_MESSAGE_LEN, actual }
}

/// Streaming SM3. Write the message in any number of pieces, then `sum`.
/// The chaining value and buffered input are zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Digest {
    s: [u32; 8],
    x: [u8; BLOCK_SIZE],
    nx: usize,
    // message length in bytes.
    len: u64,
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest").field("len", &self.len).finish_non_exhaustive()
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest {
    pub fn new() -> Digest {
        Digest { s: IV, x: [0; BLOCK_SIZE], nx: 0, len: 0 }
    }

    pub fn reset(&mut self) -> &mut Digest {
        self.s = IV;
        self.x = [0; BLOCK_SIZE];
        self.nx = 0;
        self.len = 0;
        self
    }

    /// The bytes written so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `p` to the message. Fails, leaving the state untouched, once
    /// the total would exceed [`MAX_MESSAGE_LEN`].
    pub fn write(&mut self, p: &[u8]) -> Result<&mut Digest> {
        let len = match self.len.checked_add(p.len() as u64) {
            Some(len) if len <= MAX_MESSAGE_LEN => len,
            Some(len) => return Err(too_long(len)),
            None => return Err(too_long(u64::MAX)),
        };
        self.len = len;

        let mut p = p;
        if self.nx > 0 {
            let copy_len = p.len().min(BLOCK_SIZE - self.nx);
            self.x[self.nx..self.nx + copy_len].copy_from_slice(&p[..copy_len]);
            self.nx += copy_len;

            if self.nx == BLOCK_SIZE {
                compress_generic(&mut self.s, self.x.as_slice());
                self.nx = 0;
            }
            p = &p[copy_len..];
        }
        if p.len() >= BLOCK_SIZE {
            p = compress_generic(&mut self.s, p);
        }
        if !p.is_empty() {
            self.x[..p.len()].copy_from_slice(p);
            self.nx = p.len();
        }
        Ok(self)
    }

    // sum not change the internal states.
    //
    // # Panics
    //
    // Panics if output is shorter than DIGEST_SIZE.
    pub fn sum_into(&self, output: &mut [u8]) {
        let len = self.len * 8;
        let mut buf: [u8; BLOCK_SIZE * 2] = [0; BLOCK_SIZE * 2];
        buf[..self.nx].copy_from_slice(&self.x[..self.nx]);

        let mut n = self.nx;
        buf[n] = 0x80u8;
        n += 1;
        let mut nn = BLOCK_SIZE;
        if n > BLOCK_SIZE - 8 {
            nn += BLOCK_SIZE;
        }
        buf[nn - 8..nn].copy_from_slice(&len.to_be_bytes());

        // copy internal state to d.
        let mut d: [u32; 8] = self.s;
        compress_generic(&mut d, &buf[..nn]);

        for (out, di) in output[..DIGEST_SIZE].chunks_exact_mut(4).zip(d.iter()) {
            out.copy_from_slice(&di.to_be_bytes());
        }
        buf.zeroize();
        d.zeroize();
    }

    // sum not change the internal states.
    pub fn sum(&self) -> [u8; DIGEST_SIZE] {
        let mut result: [u8; DIGEST_SIZE] = [0; DIGEST_SIZE];
        self.sum_into(&mut result);
        result
    }
}

/// Pads a message to a positive multiple of 64 bytes: the message, 0x80,
/// zeros up to 56 mod 64, then the bit length as 8 big-endian bytes.
pub fn pad(msg: &[u8]) -> Result<Vec<u8>> {
    let len = msg.len() as u64;
    if len > MAX_MESSAGE_LEN {
        return Err(too_long(len));
    }
    let padded_len = (msg.len() + 1 + 8).div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(msg);
    out.push(0x80);
    out.resize(padded_len - 8, 0);
    out.extend_from_slice(&(len * 8).to_be_bytes());
    Ok(out)
}

/// The SM3 digest of `msg`.
pub fn sm3(msg: &[u8]) -> Result<[u8; DIGEST_SIZE]> {
    let mut h = Digest::new();
    h.write(msg)?;
    Ok(h.sum())
}

/// Hashes the concatenation of its arguments, evaluating to
/// `Result<[u8; 32]>`.
#[macro_export]
macro_rules! sm3 {
    ($($x:expr),+ $(,)?) => {{
        let mut h = $crate::sm3::Digest::new();
        (|| -> $crate::error::Result<[u8; $crate::sm3::DIGEST_SIZE]> {
            $(
                h.write($x)?;
            )*
            Ok(h.sum())
        })()
    }};
}

#[cfg(test)]
mod test_data;
