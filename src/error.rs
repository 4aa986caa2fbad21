use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Level dispatch errors
    #[error("Unsupported compression level: {0} (supported: 5-10)")]
    UnsupportedLevel(i32),

    // Format configuration errors
    #[error("Invalid window size: {0} bits (must be 17-23)")]
    InvalidWindowBits(u32),

    #[error("Invalid slot width: {slot_bits} bits for a {window_bits}-bit window")]
    InvalidSlotBits { slot_bits: u32, window_bits: u32 },

    #[error("Invalid hash width: {0} bits (must be 10-18)")]
    InvalidHashBits(u32),

    // Depacking errors
    #[error("Match distance {distance} exceeds decoded output of {available} bytes")]
    InvalidOffset { distance: usize, available: usize },

    #[error("Match length {length} overruns output ({remaining} bytes remaining)")]
    OutputOverrun { length: usize, remaining: usize },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, Error>;
