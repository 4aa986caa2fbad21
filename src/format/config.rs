use crate::error::{Error, Result};

/// Default window size in bits (2 MiB window)
pub const DEFAULT_WINDOW_BITS: u32 = 21;

/// Default width of the distance slot index
pub const DEFAULT_SLOT_BITS: u32 = 4;

/// Default number of hash bits used for candidate lookup (128k entries)
///
/// Values between 10 and 18 work well. Lower values make compression faster
/// and the ratio worse.
pub const DEFAULT_HASH_BITS: u32 = 17;

/// Shortest encodable match
pub const MIN_MATCH: usize = 3;

/// Longest encodable match
pub const MAX_MATCH: usize = 566;

/// Cost of a literal token in bits: selector bit plus the raw byte
pub const LITERAL_COST: u32 = 9;

/// Largest input the parsers accept
///
/// Positions and path costs share `u32` scratch words, and a path cost grows
/// by at most `LITERAL_COST` bits per byte.
pub const MAX_INPUT_SIZE: usize = (u32::MAX / (LITERAL_COST + 1)) as usize;

/// Distance beyond which short matches are considered poor value
///
/// Not consumed by the bundled parsers or the depacker; exposed for match
/// finders that want to drop distant length-3 matches.
pub const TOO_FAR: usize = 1 << 16;

/// Marker for an empty hash chain or tree link in scratch memory
pub const NO_MATCH_POS: u32 = u32::MAX;

/// Size in bytes of one scratch-memory word
pub const WORD_SIZE: usize = std::mem::size_of::<u32>();

const WINDOW_BITS_RANGE: std::ops::RangeInclusive<u32> = 17..=23;
const SLOT_BITS_RANGE: std::ops::RangeInclusive<u32> = 2..=4;
const HASH_BITS_RANGE: std::ops::RangeInclusive<u32> = 10..=18;

/// Parameters shared by the encoder, the cost model and the depacker
///
/// `window_bits` and `slot_bits` define the bitstream; a stream must be
/// depacked with the same values it was packed with. `hash_bits` only
/// affects match finding and scratch-memory size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    window_bits: u32,
    slot_bits: u32,
    hash_bits: u32,
}

impl FormatConfig {
    pub const DEFAULT: Self = Self {
        window_bits: DEFAULT_WINDOW_BITS,
        slot_bits: DEFAULT_SLOT_BITS,
        hash_bits: DEFAULT_HASH_BITS,
    };

    pub fn new(window_bits: u32, slot_bits: u32, hash_bits: u32) -> Result<Self> {
        if !WINDOW_BITS_RANGE.contains(&window_bits) {
            return Err(Error::InvalidWindowBits(window_bits));
        }
        if !SLOT_BITS_RANGE.contains(&slot_bits) || (1 << slot_bits) >= window_bits {
            return Err(Error::InvalidSlotBits { slot_bits, window_bits });
        }
        if !HASH_BITS_RANGE.contains(&hash_bits) {
            return Err(Error::InvalidHashBits(hash_bits));
        }
        Ok(Self { window_bits, slot_bits, hash_bits })
    }

    /// Same format with a different lookup table width
    pub fn with_hash_bits(self, hash_bits: u32) -> Result<Self> {
        Self::new(self.window_bits, self.slot_bits, hash_bits)
    }

    pub fn window_bits(&self) -> u32 {
        self.window_bits
    }

    pub fn slot_bits(&self) -> u32 {
        self.slot_bits
    }

    pub fn hash_bits(&self) -> u32 {
        self.hash_bits
    }

    /// Largest match distance in bytes
    #[inline]
    pub fn window_size(&self) -> usize {
        1 << self.window_bits
    }

    #[inline]
    pub fn num_slots(&self) -> u32 {
        1 << self.slot_bits
    }

    /// Magnitude level of the nearest slot
    #[inline]
    pub fn slot_base(&self) -> u32 {
        self.window_bits - self.num_slots()
    }

    /// Fixed width of offsets in the nearest slot
    #[inline]
    pub fn near_offset_bits(&self) -> u32 {
        self.window_bits - (self.num_slots() - 1)
    }

    /// Entries in the candidate lookup table
    #[inline]
    pub fn lookup_size(&self) -> usize {
        1 << self.hash_bits
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
