use super::config::FormatConfig;
use super::tables::{DistanceSlot, LengthClass};

/// Exact bit cost of a match with the default format
///
/// `offset` is the match distance minus one.
#[inline]
pub fn match_cost(offset: usize, length: usize) -> u32 {
    match_cost_with(&FormatConfig::DEFAULT, offset, length)
}

/// Exact bit cost of a match: selector, length class and extra bits, slot
/// index and offset payload
///
/// Derived from the same tables the token encoder writes from, so the
/// result always equals the number of bits [`encode_match`] emits.
///
/// [`encode_match`]: super::encode::encode_match
#[inline]
pub fn match_cost_with(config: &FormatConfig, offset: usize, length: usize) -> u32 {
    let length_bits = LengthClass::classify(length).code().bits();
    let offset_bits = DistanceSlot::classify(offset, config).bits(config);
    1 + length_bits + offset_bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::config::{MAX_MATCH, MIN_MATCH};
    use crate::format::tables::LENGTH_CODES;

    #[test]
    fn test_nearest_shortest_match() {
        // 1 selector + 1 prefix + 2 extra + 4 slot + 6 near offset
        assert_eq!(match_cost(10, 3), 14);
        assert_eq!(match_cost(0, 3), 14);
        assert_eq!(match_cost(63, 6), 14);
    }

    #[test]
    fn test_length_classes() {
        assert_eq!(match_cost(0, 7), 15);
        assert_eq!(match_cost(0, 11), 16);
        assert_eq!(match_cost(0, 15), 18);
        assert_eq!(match_cost(0, 23), 21);
        assert_eq!(match_cost(0, 55), 25);
        assert_eq!(match_cost(0, MAX_MATCH), 25);
    }

    #[test]
    fn test_far_offsets() {
        // First far slot: m = 6
        assert_eq!(match_cost(64, 3), 1 + 3 + 4 + 6);
        assert_eq!(match_cost(128, 3), 1 + 3 + 4 + 7);
        assert_eq!(match_cost((1 << 21) - 1, 3), 1 + 3 + 4 + 20);
    }

    #[test]
    fn test_monotonic_in_length() {
        let offsets = [0usize, 100, 5000, 1 << 20];
        for offset in offsets {
            let mut prev = match_cost(offset, MIN_MATCH);
            for len in MIN_MATCH + 1..=MAX_MATCH {
                let cost = match_cost(offset, len);
                assert!(cost >= prev, "Cost decreased at length {}", len);
                prev = cost;
            }
        }
    }

    #[test]
    fn test_class_boundary_steps() {
        for pair in LENGTH_CODES.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let last_len = (next.base as usize) + MIN_MATCH - 1;
            let step = match_cost(0, last_len + 1) - match_cost(0, last_len);
            assert_eq!(step, next.bits() - prev.bits());
            if next.prefix_bits > prev.prefix_bits {
                assert!(step >= next.extra_bits - prev.extra_bits + 1);
            } else {
                // The fallback class has no terminating selector bit
                assert_eq!(step, next.extra_bits - prev.extra_bits);
            }
        }
    }

    #[test]
    fn test_monotonic_in_distance() {
        for len in [MIN_MATCH, 10, 40, 300] {
            let mut prev = match_cost(0, len);
            let mut offset = 1;
            while offset < 1 << 21 {
                let cost = match_cost(offset, len);
                assert!(cost >= prev, "Cost decreased at offset {}", offset);
                prev = cost;
                offset = offset * 3 / 2 + 1;
            }
        }
    }

    #[test]
    fn test_smaller_window() {
        let config = FormatConfig::new(17, 4, 12).unwrap();
        // slot_base 1, near offsets < 4 stored in 2 bits
        assert_eq!(match_cost_with(&config, 3, 3), 1 + 3 + 4 + 2);
        assert_eq!(match_cost_with(&config, 4, 3), 1 + 3 + 4 + 2);
        assert_eq!(match_cost_with(&config, 8, 3), 1 + 3 + 4 + 3);
    }
}
