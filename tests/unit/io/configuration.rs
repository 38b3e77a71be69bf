//! Tests for algorithm constants

#[cfg(test)]
mod tests {

    use crate::io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_PATTERN_SIZE, ENTROPY_BUCKET_COUNT, ENTROPY_NOISE_HEAP,
        ENTROPY_NOISE_SCAN, SCORE_MATCH_EPSILON, WEIGHT_EPSILON,
    };

    // Tests tie-breaking noise stays far below real entropy differences
    #[test]
    fn test_noise_scales_are_small() {
        assert!(ENTROPY_NOISE_SCAN < 1e-2);
        assert!(ENTROPY_NOISE_HEAP < ENTROPY_NOISE_SCAN);
        assert!(SCORE_MATCH_EPSILON < ENTROPY_NOISE_HEAP);
    }

    // Tests clamping tolerance is tighter than any real weight
    #[test]
    fn test_weight_epsilon_below_unit_weight() {
        assert!(WEIGHT_EPSILON < 1.0);
        assert!(WEIGHT_EPSILON > 0.0);
    }

    // Tests defaults are usable without further configuration
    #[test]
    fn test_defaults_are_sane() {
        assert!(DEFAULT_PATTERN_SIZE >= 1);
        assert!(DEFAULT_MAX_ATTEMPTS >= 1);
        assert!(ENTROPY_BUCKET_COUNT >= 2);
    }
}
