//! Tests for the generation state machine

#[cfg(test)]
mod tests {

    use crate::generator::{PropagationResult, TileMapGenerator};
    use crate::heuristic::scanline::ScanlineHeuristic;
    use crate::io::sample::char_grid_from_text;
    use crate::model::overlapping::OverlappingModel;
    use crate::propagator::ac3::Ac3Propagator;

    fn generator(
        text: &str,
        periodic: bool,
        width: usize,
        height: usize,
        seed: u64,
    ) -> TileMapGenerator<char> {
        TileMapGenerator::new(
            char_grid_from_text(text).unwrap(),
            Box::new(OverlappingModel::new(2, periodic, false)),
            Box::new(ScanlineHeuristic::new()),
            Box::new(Ac3Propagator::new()),
            width,
            height,
            seed,
        )
    }

    // Tests stepping transitions Collapsing -> Collapsed on a solvable sample
    #[test]
    fn test_state_transitions() {
        let mut g = generator("AB\nBA\n", true, 3, 3, 1);
        g.initialize().unwrap();
        loop {
            match g.step() {
                PropagationResult::Collapsing => {}
                PropagationResult::Collapsed => break,
                PropagationResult::Contradicted => unreachable!(),
            }
        }
        assert!(g.grid().cells().iter().all(|c| c.is_decided()));
    }

    // Tests initialize resets per-attempt state so attempts are independent
    #[test]
    fn test_initialize_resets_grid() {
        let mut g = generator("AB\nBA\n", true, 3, 3, 1);
        g.initialize().unwrap();
        assert_eq!(g.step(), PropagationResult::Collapsing);
        g.initialize().unwrap();
        assert!(g.grid().cells().iter().all(|c| !c.is_decided()));
    }

    // Tests an unsatisfiable sample is doomed at initialization
    #[test]
    fn test_doomed_grid_contradicts_immediately() {
        let mut g = generator("AB\nCD\n", false, 2, 2, 1);
        g.initialize().unwrap();
        assert_eq!(g.step(), PropagationResult::Contradicted);
    }

    // Tests symbol extraction uses the unknown sentinel until decided
    #[test]
    fn test_symbol_extraction() {
        let mut g = generator("AB\nBA\n", true, 2, 1, 1);
        g.initialize().unwrap();
        assert!(g.to_symbols().iter().all(|&s| s == '?'));
        assert_eq!(g.generate().unwrap(), PropagationResult::Collapsed);
        assert!(g.to_symbols().iter().all(|s| ['A', 'B'].contains(s)));
    }
}
