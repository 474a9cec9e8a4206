//! Power-of-two arithmetic for canonical grid sides and box sizes

/// Exponent `p` such that `2^p == n`, if `n` is a power of two
///
/// Returns `None` for zero and for any value with more than one bit set.
pub const fn exact_log2(n: usize) -> Option<u32> {
    if n.is_power_of_two() {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

/// Box sizes `1, 2, 4, …, 2^max_exponent` in ascending order
pub fn box_sizes(max_exponent: u32) -> impl Iterator<Item = usize> {
    (0..=max_exponent).map(|k| 1_usize << k)
}
