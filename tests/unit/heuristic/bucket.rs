//! Tests for bucketed minimum entropy selection

#[cfg(test)]
mod tests {

    use crate::heuristic::Heuristic;
    use crate::heuristic::bucket::MinEntropyBucketHeuristic;
    use crate::model::{Model, OverlappingModel};
    use crate::spatial::wave::WaveGrid;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn model() -> OverlappingModel {
        let mut model = OverlappingModel::new(1, false, false);
        let ids = Array2::from_shape_vec((1, 4), vec![0, 0, 0, 1]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        model.initialize(&ids, &mut rng).unwrap();
        model
    }

    // Tests a ban moves the cell to a lower bucket and resets the cursor
    #[test]
    fn test_ban_lowers_bucket() {
        let model = model();
        let mut grid = WaveGrid::new(4, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyBucketHeuristic::new();
        heuristic.initialize(&grid, &model, 0);

        grid.ban(3, 0, model.weight(0));
        heuristic.on_banned(3, 0);

        assert_eq!(heuristic.pick_next_cell(&grid), Some(3));
    }

    // Tests retired cells leave stale bucket entries that are dropped
    #[test]
    fn test_retired_cells_are_skipped() {
        let model = model();
        let mut grid = WaveGrid::new(2, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyBucketHeuristic::new();
        heuristic.initialize(&grid, &model, 0);

        grid.observe(1, 0, 1.0);
        heuristic.on_observed(1, 0);

        assert_eq!(heuristic.pick_next_cell(&grid), Some(0));
        grid.observe(0, 0, 1.0);
        heuristic.on_observed(0, 0);
        assert_eq!(heuristic.pick_next_cell(&grid), None);
    }

    // Tests an emptied domain retires the cell instead of crashing bucket math
    #[test]
    fn test_empty_domain_is_retired() {
        let model = model();
        let mut grid = WaveGrid::new(1, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyBucketHeuristic::new();
        heuristic.initialize(&grid, &model, 0);

        grid.ban(0, 0, model.weight(0));
        heuristic.on_banned(0, 0);
        grid.ban(0, 1, model.weight(1));
        heuristic.on_banned(0, 1);

        assert_eq!(heuristic.pick_next_cell(&grid), None);
    }
}
