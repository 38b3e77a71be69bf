//! Tests for text and JSON sample parsing

#[cfg(test)]
mod tests {

    use crate::io::sample::{char_grid_from_text, load_json_sample, save_json_grid};
    use crate::spatial::mapped::MapData;

    // Tests basic parsing assigns dimensions from the line structure
    #[test]
    fn test_basic_parsing() {
        let grid = char_grid_from_text("ab\ncd\nef\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.symbol_count(), 6);
    }

    // Tests blank lines are dropped rather than padded into rows
    #[test]
    fn test_blank_lines_dropped() {
        let grid = char_grid_from_text("ab\n\ncd\n").unwrap();
        assert_eq!(grid.height(), 2);
    }

    // Tests JSON persistence round trip through the filesystem
    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        let data = MapData {
            grid: vec!['a', 'b'],
            width: 2,
            height: 1,
            unknown: '?',
        };
        save_json_grid(&path, &data).unwrap();
        let grid = load_json_sample(&path).unwrap();
        assert_eq!(grid.to_map_data(), data);
    }

    // Tests a record with lying dimensions is rejected on load
    #[test]
    fn test_inconsistent_record_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"grid":["a","b"],"width":3,"height":1,"unknown":"?"}"#)
            .unwrap();
        assert!(load_json_sample(&path).is_err());
    }
}
