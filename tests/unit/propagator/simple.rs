//! Tests for the bounded full-sweep propagator

#[cfg(test)]
mod tests {

    use crate::model::{Model, OverlappingModel};
    use crate::propagator::Propagator;
    use crate::propagator::simple::SimplePropagator;
    use crate::spatial::wave::WaveGrid;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn checkerboard_model() -> OverlappingModel {
        let mut model = OverlappingModel::new(2, true, false);
        let ids = Array2::from_shape_vec((2, 2), vec![0, 1, 1, 0]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        model.initialize(&ids, &mut rng).unwrap();
        model
    }

    // Tests enough sweeps reach the same fixpoint as the exact propagators
    #[test]
    fn test_sweeps_reach_fixpoint() {
        let model = checkerboard_model();
        let mut grid = WaveGrid::new(4, 4);
        grid.initialize(&model);
        let mut propagator = SimplePropagator::default();
        let mut rng = StdRng::seed_from_u64(8);

        assert!(propagator.collapse(&mut grid, &model, 0, &mut rng));
        for cell in grid.cells() {
            assert_eq!(cell.domain_count(), 1);
        }
    }

    // Tests a one-sweep limit truncates silently without failing
    #[test]
    fn test_sweep_limit_truncates_silently() {
        let model = checkerboard_model();
        let mut grid = WaveGrid::new(8, 1);
        grid.initialize(&model);
        let mut propagator = SimplePropagator::new(1);
        let mut rng = StdRng::seed_from_u64(8);

        assert!(propagator.collapse(&mut grid, &model, 0, &mut rng));
        assert!(grid.cell(0).unwrap().is_decided());
    }

    // Tests collapse on an emptied cell reports failure
    #[test]
    fn test_empty_domain_fails() {
        let model = checkerboard_model();
        let mut grid = WaveGrid::new(2, 1);
        grid.initialize(&model);
        grid.ban(0, 0, model.weight(0));
        grid.ban(0, 1, model.weight(1));
        let mut propagator = SimplePropagator::default();
        let mut rng = StdRng::seed_from_u64(8);

        assert!(!propagator.collapse(&mut grid, &model, 0, &mut rng));
    }
}
