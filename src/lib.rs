pub mod bits;
pub mod decoder;
pub mod error;
pub mod format;
pub mod hash;
pub mod parse;
pub mod trace;

pub use decoder::{depack, depack_from, depack_from_with_config, depack_with_config};
pub use error::{Error, Result};
pub use format::{match_cost, FormatConfig, Token};
pub use parse::Strategy;

use trace::{trace_pack_end, trace_pack_start, trace_unsupported_level};

/// Compression level (5-10)
///
/// - Levels 5-9: Backwards hash-chain parse, searching deeper at each level
/// - Level 10: Binary-tree parse considering every match (best compression)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum CompressionLevel {
    #[default]
    Level5 = 5,
    Level6 = 6,
    Level7 = 7,
    Level8 = 8,
    Level9 = 9,
    Level10 = 10,
}

impl CompressionLevel {
    pub const ALL: [CompressionLevel; 6] =
        [Self::Level5, Self::Level6, Self::Level7, Self::Level8, Self::Level9, Self::Level10];

    /// Create from numeric level, rejecting anything outside 5-10
    pub fn from_level(level: i32) -> Result<Self> {
        match level {
            5 => Ok(Self::Level5),
            6 => Ok(Self::Level6),
            7 => Ok(Self::Level7),
            8 => Ok(Self::Level8),
            9 => Ok(Self::Level9),
            10 => Ok(Self::Level10),
            _ => Err(Error::UnsupportedLevel(level)),
        }
    }

    /// Get numeric level (5-10)
    pub fn level(&self) -> i32 {
        *self as i32
    }

    /// Parsing strategy and search limits for this level
    pub fn strategy(&self) -> Strategy {
        let (max_depth, accept_len) = match self {
            Self::Level5 => (1, 16),
            Self::Level6 => (8, 32),
            Self::Level7 => (64, 64),
            Self::Level8 => (512, 128),
            Self::Level9 => (4096, 256),
            Self::Level10 => return Strategy::Optimal,
        };
        Strategy::HashChain { max_depth, accept_len }
    }

}

impl TryFrom<i32> for CompressionLevel {
    type Error = Error;

    fn try_from(level: i32) -> Result<Self> {
        Self::from_level(level)
    }
}

fn resolve_level(level: i32) -> Result<CompressionLevel> {
    CompressionLevel::from_level(level).map_err(|err| {
        trace_unsupported_level(level);
        err
    })
}

/// Upper bound on the packed size of `src_size` bytes
///
/// A literal takes 9 bits, so incompressible input grows by at most one
/// byte in eight, plus slack for the final partial byte. Saturates at
/// `usize::MAX`.
pub fn max_packed_size(src_size: usize) -> usize {
    src_size.saturating_add(src_size / 8).saturating_add(64)
}

fn assert_input_size(src_size: usize) {
    assert!(
        src_size <= format::MAX_INPUT_SIZE,
        "Input of {} bytes is too large to pack (limit {} bytes)",
        src_size,
        format::MAX_INPUT_SIZE
    );
}

/// Scratch memory in bytes needed to pack `src_size` bytes at `level`
///
/// Saturates at `usize::MAX` for sizes no buffer can hold.
pub fn workmem_size(src_size: usize, level: i32) -> Result<usize> {
    workmem_size_with_config(&FormatConfig::default(), src_size, level)
}

/// Scratch memory in bytes needed to pack `src_size` bytes at `level`
/// with the given format
pub fn workmem_size_with_config(
    config: &FormatConfig,
    src_size: usize,
    level: i32,
) -> Result<usize> {
    let level = resolve_level(level)?;
    Ok(level.strategy().workmem_size(config, src_size))
}

/// Pack `src` into `dst` at `level` with the default format
///
/// Returns the packed size. `workmem` must hold at least
/// [`workmem_size`]`(src.len(), level)` bytes and `dst` at least
/// [`max_packed_size`]`(src.len())` bytes.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLevel`] for levels outside 5-10, without
/// touching `dst` or `workmem`.
///
/// # Panics
///
/// Panics if `dst` or `workmem` is too small, or if `src` is longer than
/// [`format::MAX_INPUT_SIZE`] (`u32::MAX / 10` bytes, about 429 MB).
pub fn pack(src: &[u8], dst: &mut [u8], workmem: &mut [u32], level: i32) -> Result<usize> {
    pack_with_config(&FormatConfig::default(), src, dst, workmem, level)
}

/// Pack `src` into `dst` at `level` with the given format
///
/// The stream must be depacked with the same `window_bits` and `slot_bits`.
pub fn pack_with_config(
    config: &FormatConfig,
    src: &[u8],
    dst: &mut [u8],
    workmem: &mut [u32],
    level: i32,
) -> Result<usize> {
    let level = resolve_level(level)?;
    let strategy = level.strategy();

    let workmem_words = strategy.workmem_words(config, src.len());
    assert_input_size(src.len());
    assert!(
        dst.len() >= max_packed_size(src.len()),
        "Output buffer of {} bytes is smaller than {} bytes",
        dst.len(),
        max_packed_size(src.len())
    );
    assert!(
        workmem.len() >= workmem_words,
        "Work memory of {} words is smaller than {} words",
        workmem.len(),
        workmem_words
    );

    trace_pack_start(level.level(), src.len(), workmem_words * format::WORD_SIZE);

    let packed_size = strategy.pack(config, src, dst, workmem);

    trace_pack_end(level.level(), src.len(), packed_size);

    Ok(packed_size)
}

/// Reusable packer owning its scratch memory
///
/// Convenience for packing many buffers at one level: work memory grows to
/// the largest input seen and is reused between calls.
#[derive(Clone, Debug)]
pub struct Compressor {
    config: FormatConfig,
    level: CompressionLevel,
    workmem: Vec<u32>,
}

impl Compressor {
    pub fn new(level: CompressionLevel) -> Self {
        Self::with_config(FormatConfig::default(), level)
    }

    pub fn with_config(config: FormatConfig, level: CompressionLevel) -> Self {
        Self { config, level, workmem: Vec::new() }
    }

    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Pack `src` into a new vector sized to the packed stream
    pub fn compress(&mut self, src: &[u8]) -> Result<Vec<u8>> {
        let words = self.level.strategy().workmem_words(&self.config, src.len());
        if self.workmem.len() < words {
            self.workmem.resize(words, 0);
        }

        let mut dst = vec![0u8; max_packed_size(src.len())];
        let level = self.level.level();
        let size = pack_with_config(&self.config, src, &mut dst, &mut self.workmem, level)?;
        dst.truncate(size);
        Ok(dst)
    }

    /// Depack a stream produced by [`compress`](Self::compress) with the
    /// same format
    pub fn decompress(&self, src: &[u8], depacked_size: usize) -> Result<Vec<u8>> {
        let mut dst = vec![0u8; depacked_size];
        depack_with_config(&self.config, src, &mut dst)?;
        Ok(dst)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(CompressionLevel::default())
    }
}
