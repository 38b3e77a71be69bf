//! Tests for symbol/id mapping and persisted sample records

#[cfg(test)]
mod tests {

    use crate::spatial::mapped::{MapData, MappedGrid};

    // Tests first-seen id assignment in row-major order
    #[test]
    fn test_first_seen_id_assignment() {
        let grid = MappedGrid::new(vec!['c', 'a', 'c', 'b'], 2, 2, '?').unwrap();
        assert_eq!(grid.id_of(&'c'), Some(0));
        assert_eq!(grid.id_of(&'a'), Some(1));
        assert_eq!(grid.id_of(&'b'), Some(2));
        assert_eq!(grid.id_of(&'z'), None);
        assert_eq!(grid.symbol_count(), 3);
    }

    // Tests id and symbol lookups invert each other
    #[test]
    fn test_lookup_inversion() {
        let grid = MappedGrid::new(vec![10_u8, 20, 30], 3, 1, 0).unwrap();
        for id in 0..grid.symbol_count() {
            let symbol = grid.symbol_of(id).copied().unwrap();
            assert_eq!(grid.id_of(&symbol), Some(id));
        }
    }

    // Tests that length validation rejects inconsistent records
    #[test]
    fn test_length_validation() {
        assert!(MappedGrid::new(vec![1_u8, 2, 3], 2, 2, 0).is_err());
    }

    // Tests persisted record round trip
    #[test]
    fn test_map_data_round_trip() {
        let data = MapData {
            grid: vec!['a', 'b', 'b', 'a'],
            width: 2,
            height: 2,
            unknown: '?',
        };
        let grid = MappedGrid::from_map_data(data.clone()).unwrap();
        assert_eq!(grid.to_map_data(), data);
    }

    // Tests id grid shape is (height, width)
    #[test]
    fn test_to_ids_shape() {
        let grid = MappedGrid::new(vec!['a', 'b', 'c', 'd', 'e', 'f'], 3, 2, '?').unwrap();
        let ids = grid.to_ids();
        assert_eq!(ids.dim(), (2, 3));
        assert_eq!(ids.get((1, 2)), Some(&5));
    }

    // Tests unknown substitution for misses and undecided cells
    #[test]
    fn test_unknown_substitution() {
        let grid = MappedGrid::new(vec!['a', 'b'], 2, 1, '?').unwrap();
        assert_eq!(grid.to_symbols(&[None, Some(99)]), vec!['?', '?']);
        assert_eq!(grid.to_symbols(&[Some(0), Some(1)]), vec!['a', 'b']);
    }
}
