//! Tests for full-scan minimum entropy selection

#[cfg(test)]
mod tests {

    use crate::heuristic::Heuristic;
    use crate::heuristic::entropy::MinEntropyHeuristic;
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

    // Tests the reduced cell wins over full-domain cells
    #[test]
    fn test_reduced_cell_wins() {
        let model = model();
        let mut grid = WaveGrid::new(3, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeuristic::new();
        heuristic.initialize(&grid, &model, 1);

        grid.ban(1, 0, model.weight(0));
        heuristic.on_banned(1, 0);

        assert_eq!(heuristic.pick_next_cell(&grid), Some(1));
    }

    // Tests decided and contradicted cells are never candidates
    #[test]
    fn test_skips_unusable_cells() {
        let model = model();
        let mut grid = WaveGrid::new(2, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeuristic::new();
        heuristic.initialize(&grid, &model, 1);

        grid.observe(0, 0, 1.0);
        heuristic.on_observed(0, 0);
        grid.ban(1, 0, model.weight(0));
        heuristic.on_banned(1, 0);
        grid.ban(1, 1, model.weight(1));
        heuristic.on_banned(1, 1);

        assert_eq!(heuristic.pick_next_cell(&grid), None);
    }

    // Tests the shadow sum survives a ban-to-zero without going negative
    #[test]
    fn test_shadow_sum_clamps() {
        let model = model();
        let mut grid = WaveGrid::new(1, 1);
        grid.initialize(&model);
        let mut heuristic = MinEntropyHeuristic::new();
        heuristic.initialize(&grid, &model, 1);

        grid.ban(0, 0, model.weight(0));
        heuristic.on_banned(0, 0);
        grid.ban(0, 1, model.weight(1));
        heuristic.on_banned(0, 1);

        assert_eq!(heuristic.pick_next_cell(&grid), None);
    }
}
