/// Bit-level packer for CRUSH output
///
/// Accumulates bits LSB-first in a 32-bit register and commits whole bytes
/// to a caller-owned output slice. The packer never reads from the slice.
pub struct BitPacker<'a> {
    /// Destination buffer
    output: &'a mut [u8],
    /// Next byte to write in `output`
    pos: usize,
    /// Pending bits, oldest in the least significant position
    tag: u32,
    /// Number of valid bits in `tag` (0-31 between calls)
    count: u32,
}

impl<'a> BitPacker<'a> {
    pub fn new(output: &'a mut [u8]) -> Self {
        Self { output, pos: 0, tag: 0, count: 0 }
    }

    /// Write `num_bits` (0-32) from `value` in LSB-first order
    ///
    /// Bits of `value` above `num_bits` must be zero.
    pub fn put_bits(&mut self, value: u32, num_bits: u32) {
        debug_assert!(num_bits <= 32, "Cannot write more than 32 bits at once");
        debug_assert!(
            num_bits == 32 || value >> num_bits == 0,
            "Value {value:#x} does not fit in {num_bits} bits"
        );

        if num_bits == 0 {
            return;
        }

        // Wide writes are split so the pre-flush below only ever drains whole
        // bytes and the register is never left full.
        if num_bits > 24 {
            self.put_bits(value & 0xFFFF, 16);
            self.put_bits(value >> 16, num_bits - 16);
            return;
        }

        self.flush(num_bits);

        self.tag |= value << self.count;
        self.count += num_bits;
    }

    /// Commit low bytes until `num_bits` fit with at least one bit to spare
    fn flush(&mut self, num_bits: u32) {
        while self.count + num_bits > 31 {
            self.output[self.pos] = self.tag as u8;
            self.pos += 1;
            self.tag >>= 8;
            self.count -= 8;
        }
    }

    /// Number of bits currently held in the register
    pub fn pending_bits(&self) -> u32 {
        self.count
    }

    /// Total number of bits written so far, committed or pending
    pub fn bits_written(&self) -> usize {
        self.pos * 8 + self.count as usize
    }

    /// Flush all remaining bits, zero-padding the last byte, and return the
    /// number of bytes written
    pub fn finalize(mut self) -> usize {
        while self.count > 0 {
            self.output[self.pos] = self.tag as u8;
            self.pos += 1;
            self.tag >>= 8;
            self.count = self.count.saturating_sub(8);
        }
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_bits() {
        let mut buf = [0u8; 4];
        let mut packer = BitPacker::new(&mut buf);
        packer.put_bits(0b011, 3); // bits 0-2
        packer.put_bits(0b11010, 5); // bits 3-7
        assert_eq!(packer.finalize(), 1);
        assert_eq!(buf[0], 0xD3); // 11010_011 = 0xD3
    }

    #[test]
    fn test_put_cross_byte() {
        let mut buf = [0u8; 4];
        let mut packer = BitPacker::new(&mut buf);
        packer.put_bits(0xFFF, 12);
        assert_eq!(packer.finalize(), 2);
        assert_eq!(&buf[..2], &[0xFF, 0x0F]);
    }

    #[test]
    fn test_selector_sequence() {
        // 1, 01, 101 packed LSB-first -> 0b00_101_01_1
        let mut buf = [0xAAu8; 2];
        let mut packer = BitPacker::new(&mut buf);
        packer.put_bits(0b1, 1);
        packer.put_bits(0b01, 2);
        packer.put_bits(0b101, 3);
        assert_eq!(packer.finalize(), 1);
        assert_eq!(buf[0], 0b0010_1011);
        // Untouched beyond the packed size
        assert_eq!(buf[1], 0xAA);
    }

    #[test]
    fn test_pre_flush_keeps_register_bounded() {
        let mut buf = [0u8; 16];
        let mut packer = BitPacker::new(&mut buf);
        for _ in 0..10 {
            packer.put_bits(0x1FF, 9);
            assert!(packer.pending_bits() < 32);
        }
        assert_eq!(packer.bits_written(), 90);
        assert_eq!(packer.finalize(), 12);
    }

    #[test]
    fn test_register_never_left_full() {
        let mut buf = [0u8; 16];
        let mut packer = BitPacker::new(&mut buf);
        let fields = [(0xAB_CDEF, 24), (0xFF, 8), (0x7F, 7), (0x1, 1), (0xFFFF_FFFF, 32)];
        for (value, num_bits) in fields {
            packer.put_bits(value, num_bits);
            assert!(packer.pending_bits() < 32, "Register full after {} bits", num_bits);
        }
        assert_eq!(packer.bits_written(), 72);
        assert_eq!(packer.finalize(), 9);
        assert_eq!(&buf[..4], &[0xEF, 0xCD, 0xAB, 0xFF]);
        assert_eq!(&buf[4..9], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_put_full_word() {
        let mut buf = [0u8; 8];
        let mut packer = BitPacker::new(&mut buf);
        packer.put_bits(0b101, 3);
        packer.put_bits(0xDEAD_BEEF, 32);
        assert_eq!(packer.bits_written(), 35);
        assert_eq!(packer.finalize(), 5);

        let expected = (0xDEAD_BEEFu64 << 3) | 0b101;
        assert_eq!(&buf[..5], &expected.to_le_bytes()[..5]);
    }

    #[test]
    fn test_zero_bits_is_noop() {
        let mut buf = [0u8; 4];
        let mut packer = BitPacker::new(&mut buf);
        packer.put_bits(0, 0);
        assert_eq!(packer.bits_written(), 0);
        assert_eq!(packer.finalize(), 0);
    }
}
