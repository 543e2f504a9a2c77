use crate::sm4::{BLOCK_SIZE, Direction};

use super::byteorder::*;

#[inline(always)]
pub fn load_block(src: &[u8]) -> [u32; 4] {
    [get_u32_be(&src[0..4]), get_u32_be(&src[4..8]), get_u32_be(&src[8..12]), get_u32_be(&src[12..16])]
}

#[inline(always)]
pub fn store_block(dst: &mut [u8], x: [u32; 4]) {
    put_u32_be(&mut dst[..4], x[0]);
    put_u32_be(&mut dst[4..8], x[1]);
    put_u32_be(&mut dst[8..12], x[2]);
    put_u32_be(&mut dst[12..16], x[3]);
}

pub mod x32 {
    use super::super::tables::*;
    use crate::internal::rotl;

    // Byte-wise S-box substitution, byte order preserved.
    #[inline]
    pub fn tau(x: u32) -> u32 {
        (SBOX[(x & 0xff) as usize] as u32)
            | (SBOX[((x >> 8) & 0xff) as usize] as u32) << 8
            | (SBOX[((x >> 16) & 0xff) as usize] as u32) << 16
            | (SBOX[((x >> 24) & 0xff) as usize] as u32) << 24
    }

    /// The linear transform of the encryption rounds.
    #[inline]
    #[allow(non_snake_case)]
    pub fn L(x: u32) -> u32 {
        x ^ rotl(x, 2) ^ rotl(x, 10) ^ rotl(x, 18) ^ rotl(x, 24)
    }

    /// The linear transform of the key schedule.
    #[inline]
    #[allow(non_snake_case)]
    pub fn L_prime(x: u32) -> u32 {
        x ^ rotl(x, 13) ^ rotl(x, 23)
    }

    // lt_slow returns L(tau(x)), computed without the tables.
    #[inline]
    pub fn lt_slow(x: u32) -> u32 {
        L(tau(x))
    }

    // lt_fast returns L(tau(x)) by four table lookups.
    #[inline]
    pub fn lt_fast(x: u32) -> u32 {
        T_TABLES[0][(x >> 24) as usize]
            ^ T_TABLES[3][((x >> 16) & 0xff) as usize]
            ^ T_TABLES[2][((x >> 8) & 0xff) as usize]
            ^ T_TABLES[1][(x & 0xff) as usize]
    }

    // lt_prime returns L'(tau(x)).
    #[inline]
    pub fn lt_prime(x: u32) -> u32 {
        L_prime(tau(x))
    }
}

#[inline(always)]
fn round_key(rk: &[u32; 32], i: usize, direction: Direction) -> u32 {
    match direction {
        Direction::Encrypt => rk[i],
        Direction::Decrypt => rk[31 - i],
    }
}

/// Runs the 32 rounds over one block of words and returns the reversed final
/// state.
#[inline]
pub fn crypt_words(x: [u32; 4], rk: &[u32; 32], direction: Direction) -> [u32; 4] {
    let [mut a, mut b, mut c, mut d] = x;

    for i in (0..32).step_by(4) {
        a ^= x32::lt_fast(b ^ c ^ d ^ round_key(rk, i, direction));
        b ^= x32::lt_fast(c ^ d ^ a ^ round_key(rk, i + 1, direction));
        c ^= x32::lt_fast(d ^ a ^ b ^ round_key(rk, i + 2, direction));
        d ^= x32::lt_fast(a ^ b ^ c ^ round_key(rk, i + 3, direction));
    }
    [d, c, b, a]
}

// One round over all four lanes: a[l] ^= T(b[l] ^ c[l] ^ d[l] ^ k).
#[inline(always)]
fn round_x4(a: &mut [u32; 4], b: &[u32; 4], c: &[u32; 4], d: &[u32; 4], k: u32) {
    let mut x = [0u32; 4];
    for lane in 0..4 {
        x[lane] = b[lane] ^ c[lane] ^ d[lane] ^ k;
    }
    for lane in 0..4 {
        a[lane] ^= x32::lt_fast(x[lane]);
    }
}

/// Encrypts four independent blocks of words.
///
/// The state is transposed so that each register holds the same word of all
/// four lanes; a round then is the same operation on every slot and no lane
/// ever reads another.
#[inline]
pub fn crypt_words_x4(x: &[[u32; 4]; 4], rk: &[u32; 32]) -> [[u32; 4]; 4] {
    let mut a = [x[0][0], x[1][0], x[2][0], x[3][0]];
    let mut b = [x[0][1], x[1][1], x[2][1], x[3][1]];
    let mut c = [x[0][2], x[1][2], x[2][2], x[3][2]];
    let mut d = [x[0][3], x[1][3], x[2][3], x[3][3]];

    for i in (0..32).step_by(4) {
        round_x4(&mut a, &b, &c, &d, rk[i]);
        round_x4(&mut b, &c, &d, &a, rk[i + 1]);
        round_x4(&mut c, &d, &a, &b, rk[i + 2]);
        round_x4(&mut d, &a, &b, &c, rk[i + 3]);
    }

    let mut out = [[0u32; 4]; 4];
    for lane in 0..4 {
        out[lane] = [d[lane], c[lane], b[lane], a[lane]];
    }
    out
}

/*
Encrypt (or decrypt, with the reversed schedule) one block
*/
#[inline]
pub fn block_generic(output: &mut [u8], input: &[u8], rk: &[u32; 32]) {
    store_block(output, crypt_words(load_block(input), rk, Direction::Encrypt));
}

#[inline]
pub fn block_generic_inplace(in_out: &mut [u8], rk: &[u32; 32]) {
    let x = load_block(in_out);
    store_block(in_out, crypt_words(x, rk, Direction::Encrypt));
}

#[inline]
pub fn block4_generic(output: &mut [u8], input: &[u8], rk: &[u32; 32]) {
    let mut x = [[0u32; 4]; 4];
    for (xi, chunk) in x.iter_mut().zip(input[..4 * BLOCK_SIZE].chunks_exact(BLOCK_SIZE)) {
        *xi = load_block(chunk);
    }
    let y = crypt_words_x4(&x, rk);
    for (yi, chunk) in y.iter().zip(output[..4 * BLOCK_SIZE].chunks_exact_mut(BLOCK_SIZE)) {
        store_block(chunk, *yi);
    }
}

#[inline]
pub fn block4_generic_inplace(in_out: &mut [u8], rk: &[u32; 32]) {
    let mut x = [[0u32; 4]; 4];
    for (xi, chunk) in x.iter_mut().zip(in_out[..4 * BLOCK_SIZE].chunks_exact(BLOCK_SIZE)) {
        *xi = load_block(chunk);
    }
    let y = crypt_words_x4(&x, rk);
    for (yi, chunk) in y.iter().zip(in_out[..4 * BLOCK_SIZE].chunks_exact_mut(BLOCK_SIZE)) {
        store_block(chunk, *yi);
    }
}

// Encrypts min(dst.len(), src.len()) / BLOCK_SIZE blocks, four at a time
// while possible. Returns the bytes processed.
#[inline]
pub fn blocks_generic(dst: &mut [u8], src: &[u8], rk: &[u32; 32]) -> usize {
    let block_size = BLOCK_SIZE;
    let n_blocks = src.len().min(dst.len()) / BLOCK_SIZE;
    let mut n = n_blocks;
    let mut dst = dst;
    let mut src = src;
    while n >= 4 {
        block4_generic(dst, src, rk);
        dst = &mut dst[block_size * 4..];
        src = &src[block_size * 4..];
        n -= 4;
    }

    while n >= 1 {
        block_generic(dst, src, rk);
        dst = &mut dst[block_size..];
        src = &src[block_size..];
        n -= 1;
    }
    n_blocks * block_size
}

#[inline]
pub fn blocks_generic_inplace(in_out: &mut [u8], rk: &[u32; 32]) -> usize {
    let block_size = BLOCK_SIZE;
    let n_blocks = in_out.len() / BLOCK_SIZE;
    let mut n = n_blocks;
    let mut in_out = in_out;
    while n >= 4 {
        block4_generic_inplace(in_out, rk);
        in_out = &mut in_out[block_size * 4..];
        n -= 4;
    }

    while n >= 1 {
        block_generic_inplace(in_out, rk);
        in_out = &mut in_out[block_size..];
        n -= 1;
    }
    n_blocks * block_size
}
