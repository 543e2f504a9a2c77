use crate::internal::rotl;

/// The permutation P0 of the compression function.
#[inline(always)]
pub fn p0(x: u32) -> u32 {
    x ^ rotl(x, 9) ^ rotl(x, 17)
}

/// The permutation P1 of the message expansion.
#[inline(always)]
pub fn p1(x: u32) -> u32 {
    x ^ rotl(x, 15) ^ rotl(x, 23)
}

#[inline(always)]
pub(crate) fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
pub(crate) fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
pub(crate) fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
pub(crate) fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

// T[j] = rotl(Tj, j mod 32); j mod 32 may be 0 so this uses rotate_left.
pub(crate) const T: [u32; 64] = {
    let mut t = [0u32; 64];
    let mut j = 0;
    while j < 64 {
        let tj: u32 = if j < 16 { 0x79cc4519 } else { 0x7a879d8a };
        t[j] = tj.rotate_left((j % 32) as u32);
        j += 1;
    }
    t
};
