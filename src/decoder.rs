//! CRUSH depacker
//!
//! The stream carries no header or length, so the caller supplies the
//! depacked size through the length of `dst`. Decoding stops as soon as
//! `dst` is full; trailing input is ignored.

use crate::bits::BitReader;
use crate::error::{Error, Result};
use crate::format::{decode_length, DistanceSlot, FormatConfig, LengthClass};
use crate::trace::trace_depack_end;
use std::io::Read;

/// Depack `src` into `dst` with the default format
///
/// Returns the number of bytes written, which is always `dst.len()`.
pub fn depack(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    depack_from_with_config(&FormatConfig::default(), src, dst)
}

/// Depack `src` into `dst` with the given format
pub fn depack_with_config(config: &FormatConfig, src: &[u8], dst: &mut [u8]) -> Result<usize> {
    depack_from_with_config(config, src, dst)
}

/// Depack a stream read from `reader` into `dst` with the default format
pub fn depack_from<R: Read>(reader: R, dst: &mut [u8]) -> Result<usize> {
    depack_from_with_config(&FormatConfig::default(), reader, dst)
}

/// Depack a stream read from `reader` into `dst` with the given format
pub fn depack_from_with_config<R: Read>(
    config: &FormatConfig,
    reader: R,
    dst: &mut [u8],
) -> Result<usize> {
    let mut reader = BitReader::new(reader);
    let mut produced = 0;

    while produced < dst.len() {
        if !reader.read_bit()? {
            dst[produced] = reader.read_bits(8)? as u8;
            produced += 1;
            continue;
        }

        let length = read_length(&mut reader)?;
        let offset = read_offset(&mut reader, config)?;

        let distance = offset + 1;
        if distance > produced {
            return Err(Error::InvalidOffset { distance, available: produced });
        }

        let remaining = dst.len() - produced;
        if length > remaining {
            return Err(Error::OutputOverrun { length, remaining });
        }

        copy_match(dst, produced, distance, length);
        produced += length;
    }

    trace_depack_end(reader.bytes_read(), produced);

    Ok(produced)
}

/// Read a length class prefix (up to five zero bits), then its extra bits
fn read_length<R: Read>(reader: &mut BitReader<R>) -> Result<usize> {
    let mut zeros = 0;
    while zeros < 5 && !reader.read_bit()? {
        zeros += 1;
    }

    let class = LengthClass::from_prefix_zeros(zeros);
    let extra = reader.read_bits(class.code().extra_bits)?;
    Ok(decode_length(class, extra))
}

fn read_offset<R: Read>(reader: &mut BitReader<R>, config: &FormatConfig) -> Result<usize> {
    let slot = DistanceSlot::from_index(reader.read_bits(config.slot_bits())?, config);
    let payload = reader.read_bits(slot.offset_bits(config))? as usize;
    Ok(payload + slot.offset_base())
}

/// Copy `length` bytes from `distance` back; the ranges may overlap
#[inline]
fn copy_match(dst: &mut [u8], pos: usize, distance: usize, length: usize) {
    let from = pos - distance;
    if distance >= length {
        dst.copy_within(from..from + length, pos);
    } else {
        for i in 0..length {
            dst[pos + i] = dst[from + i];
        }
    }
}
