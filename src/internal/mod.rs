/// Circular left rotation of `x` by `n` bits, `n` in `1..=31`.
///
/// Panics on any other count. Rounds that may legitimately rotate by 0 (the
/// SM3 constant schedule) use `u32::rotate_left` directly.
#[inline(always)]
pub fn rotl(x: u32, n: u32) -> u32 {
    assert!(n >= 1 && n <= 31, "rotation count {} out of range 1..=31", n);
    (x << n) | (x >> (32 - n))
}
