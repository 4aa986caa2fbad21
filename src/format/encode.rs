use super::config::FormatConfig;
use super::tables::{encode_length, DistanceSlot};
use super::tokens::Token;
use crate::bits::BitPacker;

/// Write a literal: selector bit 0 followed by the byte
#[inline]
pub fn encode_literal(packer: &mut BitPacker<'_>, byte: u8) {
    packer.put_bits((byte as u32) << 1, 9);
}

/// Write a match: selector bit 1, length class prefix and extra bits, slot
/// index, then the offset payload
#[inline]
pub fn encode_match(
    packer: &mut BitPacker<'_>,
    config: &FormatConfig,
    offset: usize,
    length: usize,
) {
    packer.put_bits(1, 1);

    let (class, extra) = encode_length(length);
    let code = class.code();
    packer.put_bits(code.prefix, code.prefix_bits);
    packer.put_bits(extra, code.extra_bits);

    let slot = DistanceSlot::classify(offset, config);
    packer.put_bits(slot.index, config.slot_bits());
    packer.put_bits((offset - slot.offset_base()) as u32, slot.offset_bits(config));
}

/// Write any token
#[inline]
pub fn encode_token(packer: &mut BitPacker<'_>, config: &FormatConfig, token: Token) {
    match token {
        Token::Literal(byte) => encode_literal(packer, byte),
        Token::Match { offset, length } => encode_match(packer, config, offset, length),
    }
}
