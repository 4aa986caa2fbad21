use crate::bits::BitPacker;
use crate::format::{
    encode_literal, encode_token, match_cost_with, FormatConfig, Token, LITERAL_COST, MAX_MATCH,
    MIN_MATCH, NO_MATCH_POS,
};
use crate::hash::hash3;

/// Scratch words needed to parse `src_size` bytes
///
/// The lookup table is only used while building the chains, so it shares
/// space with the match arrays and the whole parse fits in `3 * src_size`
/// words once the input is at least half the table size.
///
/// Saturates at `usize::MAX` for sizes no buffer can hold.
pub fn workmem_words(config: &FormatConfig, src_size: usize) -> usize {
    let lookup_size = config.lookup_size();
    if lookup_size / 2 < src_size {
        src_size.saturating_mul(3)
    } else {
        src_size + lookup_size
    }
}

/// Backwards dynamic programming parse with left-extension of matches
///
/// Computes the cheapest encoding of every suffix of `src`, walking at most
/// `max_depth` hash chain candidates per position and ending a search early
/// once a match of `accept_len` bytes is found. Returns the packed size.
pub fn pack(
    config: &FormatConfig,
    src: &[u8],
    dst: &mut [u8],
    workmem: &mut [u32],
    max_depth: usize,
    accept_len: usize,
) -> usize {
    let src_size = src.len();

    if src_size == 0 {
        return 0;
    }

    let mut packer = BitPacker::new(dst);

    if src_size < 4 {
        for &byte in src {
            encode_literal(&mut packer, byte);
        }
        return packer.finalize();
    }

    let last_match_pos = src_size - 3;
    let window_size = config.window_size();

    // Phase 1: build hash chains
    //
    // prev occupies the first src_size words; the lookup table sits right
    // after it, over the space later used for match positions and lengths.
    let bits = if 2 * src_size < config.lookup_size() {
        config.hash_bits()
    } else {
        src_size.ilog2()
    };

    {
        let (prev, rest) = workmem.split_at_mut(src_size);
        let lookup = &mut rest[..1 << bits];
        lookup.fill(NO_MATCH_POS);

        for i in 0..=last_match_pos {
            let hash = hash3(&src[i..], bits) as usize;
            prev[i] = lookup[hash];
            lookup[hash] = i as u32;
        }
    }

    // Phase 2: find the lowest cost path from each position to the end
    //
    // chain[i] holds prev[i] until position i has been visited and its cost
    // afterwards; chains only lead to earlier positions, so a link is never
    // read after it has been replaced. chain[src_size] overlaps the unused
    // first match position, so mpos[i] lives at match_pos[i - 1].
    let (chain, rest) = workmem.split_at_mut(src_size + 1);
    let (match_pos, rest) = rest.split_at_mut(src_size - 1);
    let match_len = &mut rest[..src_size];

    match_len[src_size - 2] = 1;
    match_len[src_size - 1] = 1;

    chain[src_size - 2] = 2 * LITERAL_COST;
    chain[src_size - 1] = LITERAL_COST;
    chain[src_size] = 0;

    let mut cur = last_match_pos;
    while cur > 0 {
        let mut pos = chain[cur];

        debug_assert!(pos == NO_MATCH_POS || (pos as usize) < cur);

        // Start with a literal
        chain[cur] = chain[cur + 1] + LITERAL_COST;
        match_len[cur] = 1;

        let mut max_len = MIN_MATCH - 1;
        let len_limit = (src_size - cur).min(MAX_MATCH);
        let mut num_chain = max_depth;

        while pos != NO_MATCH_POS && num_chain > 0 {
            num_chain -= 1;
            let candidate = pos as usize;

            if cur - candidate > window_size {
                break;
            }

            // Only a candidate that agrees on the byte past the current best
            // can extend it
            let mut len = 0;
            if max_len < len_limit && src[candidate + max_len] == src[cur + max_len] {
                while len < len_limit && src[candidate + len] == src[cur + len] {
                    len += 1;
                }
            }

            // Candidates come closest first, so a farther match can only
            // win on the lengths past the current best.
            if len > max_len {
                let offset = cur - candidate - 1;
                let mut min_cost = u32::MAX;
                let mut min_cost_len = MIN_MATCH - 1;

                for i in max_len + 1..=len {
                    let cost_here = match_cost_with(config, offset, i) + chain[cur + i];
                    if cost_here < min_cost {
                        min_cost = cost_here;
                        min_cost_len = i;
                    }
                }

                max_len = len;

                if min_cost < chain[cur] {
                    chain[cur] = min_cost;
                    match_pos[cur - 1] = pos;
                    match_len[cur] = min_cost_len as u32;

                    // Left-extend the match while the preceding bytes agree
                    let mut candidate = candidate;
                    let mut len = min_cost_len;
                    if candidate > 0 && src[candidate - 1] == src[cur - 1] && len < MAX_MATCH {
                        loop {
                            cur -= 1;
                            candidate -= 1;
                            len += 1;
                            chain[cur] = match_cost_with(config, offset, len) + chain[cur + len];
                            match_pos[cur - 1] = candidate as u32;
                            match_len[cur] = len as u32;

                            if !(candidate > 0
                                && src[candidate - 1] == src[cur - 1]
                                && len < MAX_MATCH)
                            {
                                break;
                            }
                        }
                        break;
                    }
                }
            }

            if len >= accept_len || len == len_limit {
                break;
            }

            pos = chain[candidate];
        }

        cur -= 1;
    }

    match_len[0] = 1;

    // Phase 3: emit tokens along the lowest cost path
    let mut i = 0;
    while i < src_size {
        let token = match match_len[i] as usize {
            1 => Token::Literal(src[i]),
            length => Token::Match { offset: i - match_pos[i - 1] as usize - 1, length },
        };
        encode_token(&mut packer, config, token);
        i += token.uncompressed_size();
    }

    packer.finalize()
}
