/// Prime close to 2^32/phi
pub const FIBONACCI_MULTIPLIER: u32 = 2_654_435_761;

/// Hash the three bytes at the start of `window` down to `bits` bits (1-32)
///
/// Fibonacci (multiplicative) hashing of the little-endian 24-bit value.
/// Collisions are left to the caller's chains or trees.
#[inline]
pub fn hash3(window: &[u8], bits: u32) -> u32 {
    debug_assert!((1..=32).contains(&bits), "Hash width must be 1-32 bits, got {bits}");

    let val = window[0] as u32 | (window[1] as u32) << 8 | (window[2] as u32) << 16;
    val.wrapping_mul(FIBONACCI_MULTIPLIER) >> (32 - bits)
}
