use super::config::{FormatConfig, MAX_MATCH, MIN_MATCH};

/// Prefix code and extra bits for one match length class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthCode {
    /// Prefix value, written LSB-first
    pub prefix: u32,
    /// Width of the prefix
    pub prefix_bits: u32,
    /// Width of the offset within the class
    pub extra_bits: u32,
    /// First `length - MIN_MATCH` value covered by the class
    pub base: u32,
}

impl LengthCode {
    /// Number of lengths the class can represent
    #[inline]
    pub fn capacity(&self) -> u32 {
        1 << self.extra_bits
    }

    /// Total bits spent on a length in this class
    #[inline]
    pub fn bits(&self) -> u32 {
        self.prefix_bits + self.extra_bits
    }
}

/// Length classes, indexed by [`LengthClass`]
///
/// The first five classes are selected by a unary prefix (`k` zeros then a
/// one); the last class is the fallback after five zeros.
pub const LENGTH_CODES: [LengthCode; 6] = [
    LengthCode { prefix: 0b1, prefix_bits: 1, extra_bits: 2, base: 0 }, // 1 xx
    LengthCode { prefix: 0b10, prefix_bits: 2, extra_bits: 2, base: 4 }, // 01 xx
    LengthCode { prefix: 0b100, prefix_bits: 3, extra_bits: 2, base: 8 }, // 001 xx
    LengthCode { prefix: 0b1000, prefix_bits: 4, extra_bits: 3, base: 12 }, // 0001 xxx
    LengthCode { prefix: 0b10000, prefix_bits: 5, extra_bits: 5, base: 20 }, // 00001 xxxxx
    LengthCode { prefix: 0, prefix_bits: 5, extra_bits: 9, base: 52 }, // 00000 xxxxxxxxx
];

/// Match length class
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LengthClass {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl LengthClass {
    pub const ALL: [LengthClass; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Smallest class covering `length`
    #[inline]
    pub fn classify(length: usize) -> Self {
        debug_assert!(
            (MIN_MATCH..=MAX_MATCH).contains(&length),
            "Match length {length} out of range"
        );

        let l = (length - MIN_MATCH) as u32;
        for class in Self::ALL {
            let code = class.code();
            if l < code.base + code.capacity() {
                return class;
            }
        }
        Self::F
    }

    /// Class selected by `zeros` leading zero prefix bits (0-5)
    #[inline]
    pub fn from_prefix_zeros(zeros: usize) -> Self {
        Self::ALL[zeros.min(5)]
    }

    #[inline]
    pub fn code(self) -> &'static LengthCode {
        &LENGTH_CODES[self as usize]
    }
}

/// Split a match length into its class and the value of its extra bits
#[inline]
pub fn encode_length(length: usize) -> (LengthClass, u32) {
    let class = LengthClass::classify(length);
    (class, (length - MIN_MATCH) as u32 - class.code().base)
}

/// Rebuild a match length from its class and extra bits
#[inline]
pub fn decode_length(class: LengthClass, extra: u32) -> usize {
    (class.code().base + extra) as usize + MIN_MATCH
}

/// Logarithmic distance bucket
///
/// An offset (distance - 1) falls in the slot of its magnitude level `m`,
/// the smallest `m >= slot_base` with `offset < 2^(m+1)`. The nearest slot
/// stores the offset verbatim in a fixed width; farther slots store
/// `offset - 2^m` in `m` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceSlot {
    /// Slot index, written in `slot_bits` bits
    pub index: u32,
    /// Magnitude level `m`
    pub magnitude: u32,
}

impl DistanceSlot {
    #[inline]
    pub fn classify(offset: usize, config: &FormatConfig) -> Self {
        debug_assert!(offset < config.window_size(), "Offset {offset} outside window");

        let base = config.slot_base();
        let magnitude = if offset >> (base + 1) == 0 { base } else { offset.ilog2() };
        Self { index: magnitude - base, magnitude }
    }

    #[inline]
    pub fn from_index(index: u32, config: &FormatConfig) -> Self {
        Self { index, magnitude: index + config.slot_base() }
    }

    #[inline]
    pub fn is_near(&self) -> bool {
        self.index == 0
    }

    /// Width of the offset stored after the slot index
    #[inline]
    pub fn offset_bits(&self, config: &FormatConfig) -> u32 {
        if self.is_near() {
            config.near_offset_bits()
        } else {
            self.magnitude
        }
    }

    /// Offset represented by an all-zero payload
    #[inline]
    pub fn offset_base(&self) -> usize {
        if self.is_near() {
            0
        } else {
            1 << self.magnitude
        }
    }

    /// Total bits spent on an offset in this slot
    #[inline]
    pub fn bits(&self, config: &FormatConfig) -> u32 {
        config.slot_bits() + self.offset_bits(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bases_are_cumulative() {
        let mut next = 0;
        for code in &LENGTH_CODES {
            assert_eq!(code.base, next);
            next += code.capacity();
        }
        assert_eq!(next as usize + MIN_MATCH - 1, MAX_MATCH);
    }

    #[test]
    fn test_prefix_codes() {
        for class in LengthClass::ALL {
            let code = class.code();
            if class == LengthClass::F {
                assert_eq!((code.prefix, code.prefix_bits), (0, 5));
            } else {
                // k zeros followed by a one, LSB-first
                assert_eq!(code.prefix, 1 << class as u32);
                assert_eq!(code.prefix_bits, class as u32 + 1);
            }
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(LengthClass::classify(3), LengthClass::A);
        assert_eq!(LengthClass::classify(6), LengthClass::A);
        assert_eq!(LengthClass::classify(7), LengthClass::B);
        assert_eq!(LengthClass::classify(11), LengthClass::C);
        assert_eq!(LengthClass::classify(15), LengthClass::D);
        assert_eq!(LengthClass::classify(22), LengthClass::D);
        assert_eq!(LengthClass::classify(23), LengthClass::E);
        assert_eq!(LengthClass::classify(54), LengthClass::E);
        assert_eq!(LengthClass::classify(55), LengthClass::F);
        assert_eq!(LengthClass::classify(MAX_MATCH), LengthClass::F);
    }

    #[test]
    fn test_length_roundtrip() {
        for len in MIN_MATCH..=MAX_MATCH {
            let (class, extra) = encode_length(len);
            assert!(extra < class.code().capacity());
            assert_eq!(decode_length(class, extra), len, "Roundtrip failed for length {}", len);
        }
    }

    #[test]
    fn test_from_prefix_zeros() {
        assert_eq!(LengthClass::from_prefix_zeros(0), LengthClass::A);
        assert_eq!(LengthClass::from_prefix_zeros(4), LengthClass::E);
        assert_eq!(LengthClass::from_prefix_zeros(5), LengthClass::F);
    }

    #[test]
    fn test_slot_classify() {
        let config = FormatConfig::default();

        let near = DistanceSlot::classify(0, &config);
        assert_eq!(near, DistanceSlot { index: 0, magnitude: 5 });
        assert_eq!(DistanceSlot::classify(63, &config).index, 0);

        let first_far = DistanceSlot::classify(64, &config);
        assert_eq!(first_far, DistanceSlot { index: 1, magnitude: 6 });
        assert_eq!(first_far.offset_base(), 64);
        assert_eq!(first_far.offset_bits(&config), 6);

        let last = DistanceSlot::classify(config.window_size() - 1, &config);
        assert_eq!(last.index, config.num_slots() - 1);
        assert_eq!(last.magnitude, 20);
    }

    #[test]
    fn test_slot_covers_offset() {
        let config = FormatConfig::default();
        let mut offset = 0;
        while offset < config.window_size() {
            let slot = DistanceSlot::classify(offset, &config);
            assert!(slot.index < config.num_slots());
            let payload = offset - slot.offset_base();
            assert!(payload < 1 << slot.offset_bits(&config), "Offset {} overflows slot", offset);
            assert_eq!(DistanceSlot::from_index(slot.index, &config), slot);
            offset = offset * 2 + 1;
        }
    }
}
