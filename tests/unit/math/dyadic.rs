//! Tests for power-of-two exponents and box size sequences

#[cfg(test)]
mod tests {
    use fractal2d::math::dyadic::{box_sizes, exact_log2};

    // Tests exponents of exact powers of two
    #[test]
    fn test_exact_log2_of_powers() {
        assert_eq!(exact_log2(1), Some(0));
        assert_eq!(exact_log2(2), Some(1));
        assert_eq!(exact_log2(512), Some(9));
        assert_eq!(exact_log2(1 << 20), Some(20));
    }

    // Tests zero and composite values have no exact exponent
    #[test]
    fn test_exact_log2_rejects_non_powers() {
        for n in [0, 3, 6, 100, 511, 513] {
            assert_eq!(exact_log2(n), None, "{n}");
        }
    }

    // Tests box sizes start at one and double up to the grid side
    #[test]
    fn test_box_sizes_sequence() {
        assert_eq!(box_sizes(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(box_sizes(3).collect::<Vec<_>>(), vec![1, 2, 4, 8]);
        assert_eq!(box_sizes(9).last(), Some(512));
    }
}
