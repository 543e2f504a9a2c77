use super::{BLOCK_SIZE, util::*};

/// Message expansion of one block: `W[0..68]` and `W'[0..64]`.
#[inline]
pub fn expand(block: &[u8; BLOCK_SIZE]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    let mut ww = [0u32; 64];
    for (wi, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *wi = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15)) ^ w[j - 13].rotate_left(7) ^ w[j - 6];
    }
    for j in 0..64 {
        ww[j] = w[j] ^ w[j + 4];
    }
    (w, ww)
}

// One round. The caller rotates the register names instead of moving values:
// after the round, (d, a, b, c, h, e, f, g) is the next (A..H).
macro_rules! round {
    ($i:expr, $w:ident, $ww:ident, $a: ident,$b: ident,$c: ident,$d: ident,$e: ident,$f: ident,$g: ident,$h: ident,$ff:ident, $gg: ident) => {
        let x = $a.rotate_left(12);
        let ss1 = x.wrapping_add($e).wrapping_add(T[$i]);
        let ss1 = ss1.rotate_left(7);
        let ss2 = ss1 ^ x;
        let tt1 = $ff($a, $b, $c).wrapping_add($d).wrapping_add(ss2).wrapping_add($ww[$i]);
        let tt2 = $gg($e, $f, $g).wrapping_add($h).wrapping_add(ss1).wrapping_add($w[$i]);
        $b = $b.rotate_left(9);
        $d = tt1;
        $f = $f.rotate_left(19);
        $h = p0(tt2);
    };
}

macro_rules! round4 {
    ($i:expr, $w:ident, $ww:ident, $a: ident,$b: ident,$c: ident,$d: ident,$e: ident,$f: ident,$g: ident,$h: ident, $ff:ident, $gg: ident) => {
        round!($i, $w, $ww, $a, $b, $c, $d, $e, $f, $g, $h, $ff, $gg);
        round!($i + 1, $w, $ww, $d, $a, $b, $c, $h, $e, $f, $g, $ff, $gg);
        round!($i + 2, $w, $ww, $c, $d, $a, $b, $g, $h, $e, $f, $ff, $gg);
        round!($i + 3, $w, $ww, $b, $c, $d, $a, $f, $g, $h, $e, $ff, $gg);
    };
}

/// Compresses one block into the chaining value.
#[inline]
pub fn compress_block(iv: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    let (w, ww) = expand(block);

    let mut a = iv[0];
    let mut b = iv[1];
    let mut c = iv[2];
    let mut d = iv[3];
    let mut e = iv[4];
    let mut f = iv[5];
    let mut g = iv[6];
    let mut h = iv[7];

    round4!(0, w, ww, a, b, c, d, e, f, g, h, ff0, gg0);
    round4!(4, w, ww, a, b, c, d, e, f, g, h, ff0, gg0);
    round4!(8, w, ww, a, b, c, d, e, f, g, h, ff0, gg0);
    round4!(12, w, ww, a, b, c, d, e, f, g, h, ff0, gg0);
    round4!(16, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(20, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(24, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(28, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(32, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(36, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(40, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(44, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(48, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(52, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(56, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);
    round4!(60, w, ww, a, b, c, d, e, f, g, h, ff1, gg1);

    iv[0] ^= a;
    iv[1] ^= b;
    iv[2] ^= c;
    iv[3] ^= d;
    iv[4] ^= e;
    iv[5] ^= f;
    iv[6] ^= g;
    iv[7] ^= h;
}

// compress as much bytes as possible of p. return the tail of p which did not
// compress.
#[inline]
pub(crate) fn compress_generic<'a>(iv: &mut [u32; 8], p: &'a [u8]) -> &'a [u8] {
    let mut chunks = p.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        compress_block(iv, &block);
    }
    chunks.remainder()
}
