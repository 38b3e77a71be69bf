//! Tests for four-directional adjacency helpers

#[cfg(test)]
mod tests {

    use crate::spatial::direction::Direction;

    // Tests that canonical order is up, right, down, left
    #[test]
    fn test_canonical_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left
            ]
        );
        assert_eq!(Direction::COUNT, 4);
    }

    // Tests that offsets match the screen coordinate convention (y grows down)
    #[test]
    fn test_axis_offsets() {
        assert_eq!((Direction::Up.dx(), Direction::Up.dy()), (0, -1));
        assert_eq!((Direction::Right.dx(), Direction::Right.dy()), (1, 0));
        assert_eq!((Direction::Down.dx(), Direction::Down.dy()), (0, 1));
        assert_eq!((Direction::Left.dx(), Direction::Left.dy()), (-1, 0));
    }

    // Tests that opposite pairs share an axis with flipped sign
    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    // Tests that dense indices are unique and in canonical order
    #[test]
    fn test_dense_indices() {
        let indices: Vec<usize> = Direction::ALL.into_iter().map(Direction::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
