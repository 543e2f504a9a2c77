//! The SM4 block cipher, GB/T 32907-2016.

pub mod block;

pub const BLOCK_SIZE: usize = 16;
pub const KEY_SIZE: usize = 16;
pub const ROUNDS: usize = 32;

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Input, Result, check_len};
use block::byteorder::*;
use block::*;

/// Direction of [`sm4_transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// The 32 round keys derived from a user key. Zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys([u32; ROUNDS]);

impl RoundKeys {
    pub fn as_words(&self) -> &[u32; ROUNDS] {
        &self.0
    }

    /// The schedule in reverse order. Encrypting under it decrypts.
    pub fn reversed(&self) -> RoundKeys {
        let mut rk = self.0;
        rk.reverse();
        RoundKeys(rk)
    }
}

// Never print key material.
impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}

const FK: [u32; 4] = [0xa3b1bac6, 0x56aa3350, 0x677d9197, 0xb27022dc];
const CK: [u32; 32] = [
    0x00070e15, 0x1c232a31, 0x383f464d, 0x545b6269, 0x70777e85, 0x8c939aa1,
    0xa8afb6bd, 0xc4cbd2d9, 0xe0e7eef5, 0xfc030a11, 0x181f262d, 0x343b4249,
    0x50575e65, 0x6c737a81, 0x888f969d, 0xa4abb2b9, 0xc0c7ced5, 0xdce3eaf1,
    0xf8ff060d, 0x141b2229, 0x30373e45, 0x4c535a61, 0x686f767d, 0x848b9299,
    0xa0a7aeb5, 0xbcc3cad1, 0xd8dfe6ed, 0xf4fb0209, 0x10171e25, 0x2c333a41,
    0x484f565d, 0x646b7279,
];

#[inline]
fn key_schedule(key: &[u8; KEY_SIZE]) -> RoundKeys {
    let mut rk = [0u32; ROUNDS];
    let mut a: u32 = get_u32_be(&key[0..4]) ^ FK[0];
    let mut b = get_u32_be(&key[4..8]) ^ FK[1];
    let mut c = get_u32_be(&key[8..12]) ^ FK[2];
    let mut d = get_u32_be(&key[12..16]) ^ FK[3];
    let mut i = 0;
    while i < ROUNDS {
        a ^= x32::lt_prime(b ^ c ^ d ^ CK[i]);
        rk[i] = a;
        i += 1;

        b ^= x32::lt_prime(c ^ d ^ a ^ CK[i]);
        rk[i] = b;
        i += 1;

        c ^= x32::lt_prime(d ^ a ^ b ^ CK[i]);
        rk[i] = c;
        i += 1;

        d ^= x32::lt_prime(a ^ b ^ c ^ CK[i]);
        rk[i] = d;
        i += 1;
    }
    RoundKeys(rk)
}

/// Returns the four T-tables. The tables are built at compile time, so this
/// only hands out the shared reference; calling it is never required.
pub fn init_sm4_tables() -> &'static [[u32; 256]; 4] {
    tracing::trace!("sm4 T-tables ready");
    &T_TABLES
}

/// Expands a 16 bytes key into the 32 round keys.
pub fn sm4_key_schedule(key: &[u8]) -> Result<RoundKeys> {
    check_len(Input::Key, KEY_SIZE, key.len())?;
    let mut k = [0u8; KEY_SIZE];
    k.copy_from_slice(key);
    let rk = key_schedule(&k);
    k.zeroize();
    Ok(rk)
}

/// Encrypts or decrypts one 16 bytes block.
pub fn sm4_transform(block: &[u8], rk: &RoundKeys, direction: Direction) -> Result<[u8; BLOCK_SIZE]> {
    check_len(Input::Block, BLOCK_SIZE, block.len())?;
    let mut out = [0u8; BLOCK_SIZE];
    store_block(&mut out, crypt_words(load_block(block), &rk.0, direction));
    Ok(out)
}

/// Encrypts four consecutive 16 bytes blocks (64 bytes) lane by lane.
/// Lane `i` of the output equals `sm4_transform` of block `i`.
pub fn sm4_encrypt_x4(blocks: &[u8], rk: &RoundKeys) -> Result<[[u8; BLOCK_SIZE]; 4]> {
    check_len(Input::Blocks, 4 * BLOCK_SIZE, blocks.len())?;
    let mut x = [[0u32; 4]; 4];
    for (xi, chunk) in x.iter_mut().zip(blocks.chunks_exact(BLOCK_SIZE)) {
        *xi = load_block(chunk);
    }
    let mut out = [[0u8; BLOCK_SIZE]; 4];
    for (o, y) in out.iter_mut().zip(crypt_words_x4(&x, &rk.0).iter()) {
        store_block(o, *y);
    }
    Ok(out)
}

/// A keyed SM4 instance for bulk block processing.
///
/// It carries no mode: each block is transformed independently.
pub struct Cipher {
    rk: RoundKeys,
    rk_rev: RoundKeys,
}

impl Cipher {
    pub fn new(key: &[u8]) -> Result<Self> {
        let rk = sm4_key_schedule(key)?;
        let rk_rev = rk.reversed();
        Ok(Cipher { rk, rk_rev })
    }

    // encrypt blocks into dst. returns the bytes encrypted.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> usize {
        blocks_generic(dst, src, &self.rk.0)
    }

    // decrypt blocks into dst. returns the bytes decrypted.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> usize {
        blocks_generic(dst, src, &self.rk_rev.0)
    }

    pub fn encrypt_inplace(&self, in_out: &mut [u8]) -> usize {
        blocks_generic_inplace(in_out, &self.rk.0)
    }

    pub fn decrypt_inplace(&self, in_out: &mut [u8]) -> usize {
        blocks_generic_inplace(in_out, &self.rk_rev.0)
    }
}
