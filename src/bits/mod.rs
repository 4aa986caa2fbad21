pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitPacker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packer_reader_roundtrip() {
        let fields: Vec<(u32, u32)> = vec![
            (0b1, 1),
            (0b01, 2),
            (0b101, 3),
            (0x1FF, 9),
            (0, 5),
            (0x12345, 17),
            (0xFFFF_FFFF, 32),
            (0x3, 2),
        ];

        let mut buf = vec![0u8; 64];
        let mut packer = BitPacker::new(&mut buf);
        for &(value, bits) in &fields {
            packer.put_bits(value, bits);
        }
        let total_bits: u32 = fields.iter().map(|&(_, bits)| bits).sum();
        let size = packer.finalize();
        assert_eq!(size, ((total_bits + 7) / 8) as usize);

        let mut reader = BitReader::new(&buf[..size]);
        for &(value, bits) in &fields {
            assert_eq!(reader.read_bits(bits).unwrap(), value);
        }
    }
}
