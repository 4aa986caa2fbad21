use crate::error::{Error, Result};
use std::io::Read;

/// Bit-level reader for CRUSH streams
///
/// Bits are consumed LSB-first within each byte, mirroring [`BitPacker`].
///
/// [`BitPacker`]: super::BitPacker
pub struct BitReader<R: Read> {
    reader: R,
    /// Buffer holding up to 64 bits
    buffer: u64,
    /// Number of valid bits in buffer (0-64)
    bits_available: u32,
    /// Total bytes read (for error reporting)
    bytes_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buffer: 0, bits_available: 0, bytes_read: 0 }
    }

    /// Ensure at least `n` bits are available in buffer
    ///
    /// Refills in bulk when the buffer runs low and falls back to single
    /// bytes to detect the end of input.
    fn fill_buffer(&mut self, n: u32) -> Result<()> {
        debug_assert!(n <= 57, "Cannot request more than 57 bits at once");

        if self.bits_available >= n {
            return Ok(());
        }

        if self.bits_available <= 56 {
            let bytes_to_read = ((64 - self.bits_available) / 8) as usize;
            let mut bulk_buf = [0u8; 8];

            match self.reader.read(&mut bulk_buf[..bytes_to_read]) {
                Ok(0) => {}
                Ok(bytes_read) => {
                    for &byte in &bulk_buf[..bytes_read] {
                        self.buffer |= (byte as u64) << self.bits_available;
                        self.bits_available += 8;
                    }
                    self.bytes_read += bytes_read as u64;

                    if self.bits_available >= n {
                        return Ok(());
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }

        while self.bits_available < n {
            let mut byte = [0u8; 1];
            match self.reader.read_exact(&mut byte) {
                Ok(()) => {
                    self.buffer |= (byte[0] as u64) << self.bits_available;
                    self.bits_available += 8;
                    self.bytes_read += 1;
                }
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    return Err(Error::UnexpectedEof);
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(())
    }

    /// Read `n` bits (0-32) in LSB-first order
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        debug_assert!(n <= 32, "Cannot read more than 32 bits at once");

        if n == 0 {
            return Ok(0);
        }

        self.fill_buffer(n)?;

        let mask = (1u64 << n) - 1;
        let result = (self.buffer & mask) as u32;
        self.buffer >>= n;
        self.bits_available -= n;

        Ok(result)
    }

    /// Read a single bit
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Bytes pulled from the underlying reader so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
