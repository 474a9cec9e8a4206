//! Tests for dyadic box counting including scale ordering and monotonicity

#[cfg(test)]
mod tests {
    use fractal2d::FractalError;
    use fractal2d::analysis::box_count::{BoxCount, count_boxes};
    use fractal2d::spatial::OccupancyGrid;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(side: usize, density: f64, seed: u64) -> OccupancyGrid {
        let mut rng = StdRng::seed_from_u64(seed);
        OccupancyGrid::from_fn(side, |_, _| rng.random_bool(density)).unwrap()
    }

    // Counts boxes of the given size by scanning every block directly
    fn brute_force_count(grid: &OccupancyGrid, box_size: usize) -> usize {
        let blocks = grid.side() / box_size;
        let mut count = 0;
        for block_row in 0..blocks {
            for block_col in 0..blocks {
                let occupied = (0..box_size).any(|r| {
                    (0..box_size).any(|c| {
                        grid.is_occupied(block_row * box_size + r, block_col * box_size + c)
                    })
                });
                if occupied {
                    count += 1;
                }
            }
        }
        count
    }

    // Tests series length and ascending power-of-two box sizes
    #[test]
    fn test_series_has_one_entry_per_dyadic_size() {
        for exponent in 1..=7 {
            let side = 1 << exponent;
            let series = count_boxes(&random_grid(side, 0.2, exponent as u64)).unwrap();

            assert_eq!(series.len(), exponent + 1);
            let sizes: Vec<usize> = series.iter().map(|entry| entry.box_size).collect();
            let expected: Vec<usize> = (0..=exponent).map(|k| 1 << k).collect();
            assert_eq!(sizes, expected);
        }
    }

    // Tests unit box count equals the number of occupied cells
    #[test]
    fn test_unit_boxes_match_occupied_cells() {
        let grid = random_grid(64, 0.37, 11);
        let series = count_boxes(&grid).unwrap();

        assert_eq!(series.count_at(1), Some(grid.occupied_count()));
    }

    // Tests counts never grow as boxes get larger
    #[test]
    fn test_counts_are_non_increasing() {
        for (seed, density) in [(1, 0.01), (2, 0.1), (3, 0.5), (4, 0.9)] {
            let series = count_boxes(&random_grid(128, density, seed)).unwrap();
            for pair in series.entries().windows(2) {
                if let [finer, coarser] = pair {
                    assert!(
                        coarser.count <= finer.count,
                        "count rose from {finer:?} to {coarser:?}"
                    );
                }
            }
        }
    }

    // Tests coarsened counts agree with a direct block scan at every size
    #[test]
    fn test_counts_match_direct_block_scan() {
        let grid = random_grid(32, 0.05, 99);
        let series = count_boxes(&grid).unwrap();

        for entry in &series {
            assert_eq!(
                entry.count,
                brute_force_count(&grid, entry.box_size),
                "box size {}",
                entry.box_size
            );
        }
    }

    // Tests full grid covers (S / box)^2 boxes at every size
    #[test]
    fn test_filled_grid_counts_every_box() {
        let side = 16;
        let series = count_boxes(&OccupancyGrid::filled(side).unwrap()).unwrap();

        for entry in &series {
            let per_axis = side / entry.box_size;
            assert_eq!(entry.count, per_axis * per_axis);
        }
    }

    // Tests empty grid yields zero at every level
    #[test]
    fn test_empty_grid_counts_zero() {
        let series = count_boxes(&OccupancyGrid::new(32).unwrap()).unwrap();

        assert!(series.iter().all(|entry| entry.count == 0));
    }

    // Tests one occupied cell occupies exactly one box at every scale
    #[test]
    fn test_single_cell_counts_one_everywhere() {
        for (row, col) in [(0, 0), (7, 7), (3, 4)] {
            let mut grid = OccupancyGrid::new(8).unwrap();
            grid.set(row, col, true);

            let series = count_boxes(&grid).unwrap();
            let expected: Vec<BoxCount> = [1, 2, 4, 8]
                .into_iter()
                .map(|box_size| BoxCount { box_size, count: 1 })
                .collect();
            assert_eq!(series.entries(), expected.as_slice());
        }
    }

    // Tests checkerboard fills every box above unit size
    #[test]
    fn test_checkerboard_counts() {
        let grid = OccupancyGrid::from_fn(4, |r, c| (r + c) % 2 == 0).unwrap();
        let series = count_boxes(&grid).unwrap();

        let counts: Vec<usize> = series.iter().map(|entry| entry.count).collect();
        assert_eq!(counts, vec![8, 4, 1]);
    }

    // Tests a single-cell grid is rejected
    #[test]
    fn test_rejects_grid_below_minimum_side() {
        let grid = OccupancyGrid::filled(1).unwrap();
        let result = count_boxes(&grid);

        assert!(matches!(
            result,
            Err(FractalError::InvalidConfig {
                parameter: "grid_size",
                ..
            })
        ));
    }

    // Tests float pairs mirror the integer entries
    #[test]
    fn test_pairs_as_floats() {
        let series = count_boxes(&OccupancyGrid::filled(4).unwrap()).unwrap();
        let pairs: Vec<(f64, f64)> = series.pairs().collect();

        assert_eq!(pairs, vec![(1.0, 16.0), (2.0, 4.0), (4.0, 1.0)]);
        assert_eq!(series.count_at(3), None);
        assert!(!series.is_empty());
    }
}
