//! Tests for heap-backed minimum entropy selection with lazy deletion

#[cfg(test)]
mod tests {

    use crate::heuristic::Heuristic;
    use crate::heuristic::heap::MinEntropyHeapHeuristic;
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

    // Tests the freshest entry wins after repeated bans on one cell
    #[test]
    fn test_stale_entries_are_discarded() {
        let model = model();
        let mut grid = WaveGrid::new(3, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeapHeuristic::new();
        heuristic.initialize(&grid, &model, 9);

        // Two bans on cell 2 leave two stale heap entries behind
        grid.ban(2, 0, model.weight(0));
        heuristic.on_banned(2, 0);

        assert_eq!(heuristic.pick_next_cell(&grid), Some(2));
    }

    // Tests observed cells are poisoned and skipped on pop
    #[test]
    fn test_observed_cells_are_poisoned() {
        let model = model();
        let mut grid = WaveGrid::new(2, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeapHeuristic::new();
        heuristic.initialize(&grid, &model, 9);

        grid.ban(0, 0, model.weight(0));
        heuristic.on_banned(0, 0);
        grid.observe(0, 1, 1.0);
        heuristic.on_observed(0, 1);

        // The low-entropy entry for cell 0 is still in the heap but must
        // not be returned
        assert_eq!(heuristic.pick_next_cell(&grid), Some(1));
    }

    // Tests exhaustion drains the heap to None
    #[test]
    fn test_exhaustion() {
        let model = model();
        let mut grid = WaveGrid::new(2, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeapHeuristic::new();
        heuristic.initialize(&grid, &model, 9);

        for id in 0..2 {
            grid.observe(id, 0, 1.0);
            heuristic.on_observed(id, 0);
        }
        assert_eq!(heuristic.pick_next_cell(&grid), None);
    }
}
