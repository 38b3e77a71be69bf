//! Tests for error display and source chaining

#[cfg(test)]
mod tests {

    use crate::io::error::{GenerationError, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests invalid parameter errors carry name, value, and reason
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("pattern_size", &0, &"must be at least 1");
        let message = err.to_string();
        assert!(message.contains("pattern_size"));
        assert!(message.contains('0'));
        assert!(message.contains("at least 1"));
    }

    // Tests degenerate sample errors surface the reason verbatim
    #[test]
    fn test_degenerate_sample_display() {
        let err = GenerationError::DegenerateSample {
            reason: "no patterns extractable from sample".to_string(),
        };
        assert!(err.to_string().contains("no patterns"));
    }

    // Tests filesystem errors chain their I/O source
    #[test]
    fn test_filesystem_source_chain() {
        let err = GenerationError::FileSystem {
            path: PathBuf::from("/tmp/missing"),
            operation: "read sample",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("read sample"));
    }

    // Tests the blanket io::Error conversion keeps the source
    #[test]
    fn test_io_error_conversion() {
        let err: GenerationError = std::io::Error::from(std::io::ErrorKind::PermissionDenied).into();
        assert!(err.source().is_some());
    }
}
