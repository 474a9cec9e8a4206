//! Tests for bilinear resampling of intensity rasters

#[cfg(test)]
mod tests {
    use fractal2d::math::interpolation::resize_bilinear;
    use ndarray::Array2;

    // Tests constant rasters stay constant at any size
    #[test]
    fn test_constant_is_preserved() {
        let src = Array2::from_elem((3, 7), 97_u8);

        for (rows, cols) in [(1, 1), (8, 8), (16, 4), (2, 32)] {
            let dst = resize_bilinear(&src, rows, cols).unwrap();
            assert_eq!(dst.dim(), (rows, cols));
            assert!(dst.iter().all(|&v| v == 97));
        }
    }

    // Tests resizing to the same shape returns the source unchanged
    #[test]
    fn test_same_size_is_identity() {
        let src = Array2::from_shape_fn((5, 6), |(r, c)| (r * 40 + c * 7) as u8);
        let dst = resize_bilinear(&src, 5, 6).unwrap();

        assert_eq!(dst, src);
    }

    // Tests upscaling interpolates between pixel centres and clamps at edges
    #[test]
    fn test_upscale_gradient() {
        let src = Array2::from_shape_vec((1, 2), vec![0_u8, 255]).unwrap();
        let dst = resize_bilinear(&src, 1, 4).unwrap();

        assert_eq!(dst.iter().copied().collect::<Vec<_>>(), vec![0, 64, 191, 255]);
    }

    // Tests halving averages each 2x2 block
    #[test]
    fn test_downscale_averages_blocks() {
        let src = Array2::from_shape_fn((4, 4), |(r, c)| ((r * 4 + c) * 10) as u8);
        let dst = resize_bilinear(&src, 2, 2).unwrap();

        assert_eq!(dst.get((0, 0)).copied(), Some(25));
        assert_eq!(dst.get((0, 1)).copied(), Some(45));
        assert_eq!(dst.get((1, 0)).copied(), Some(105));
        assert_eq!(dst.get((1, 1)).copied(), Some(125));
    }

    // Tests empty sources and zero-sized targets are rejected
    #[test]
    fn test_rejects_degenerate_sizes() {
        let empty = Array2::<u8>::zeros((0, 3));
        assert!(resize_bilinear(&empty, 4, 4).is_err());

        let src = Array2::<u8>::zeros((2, 2));
        assert!(resize_bilinear(&src, 0, 4).is_err());
        assert!(resize_bilinear(&src, 4, 0).is_err());

        let message = resize_bilinear(&empty, 4, 4).unwrap_err().to_string();
        assert!(message.contains("empty"));
    }
}
