use crate::bits::BitPacker;
use crate::format::{
    encode_literal, encode_token, match_cost_with, FormatConfig, Token, LITERAL_COST, MAX_MATCH,
    MIN_MATCH, NO_MATCH_POS,
};
use crate::hash::hash3;

/// Scratch words needed to parse `src_size` bytes
///
/// Cost, match offset and match length for every position plus the end,
/// two tree links per position, and the lookup table. Saturates at
/// `usize::MAX` for sizes no buffer can hold.
pub fn workmem_words(config: &FormatConfig, src_size: usize) -> usize {
    src_size.saturating_mul(5).saturating_add(3 + config.lookup_size())
}

/// Forwards dynamic programming parse over binary match trees
///
/// Each hash bucket holds a binary tree of earlier positions ordered by the
/// strings that start there. Searching re-roots the tree at the current
/// position, which yields candidates closest first while keeping the tree
/// up to date. Every length of every candidate visited is priced, so with
/// unbounded `max_depth` and `accept_len` the parse is optimal.
///
/// Returns the packed size.
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
    let hash_bits = config.hash_bits();

    let (cost, rest) = workmem.split_at_mut(src_size + 1);
    let (match_offset, rest) = rest.split_at_mut(src_size + 1);
    let (match_len, rest) = rest.split_at_mut(src_size + 1);
    let (nodes, rest) = rest.split_at_mut(2 * src_size);
    let lookup = &mut rest[..config.lookup_size()];

    lookup.fill(NO_MATCH_POS);

    // Everything starts unreachable, arriving by literal
    cost.fill(u32::MAX);
    match_len.fill(1);
    cost[0] = 0;

    // Next position where matches are priced. Positions inside a match of
    // at least accept_len bytes are only inserted into the trees.
    let mut next_match_cur = 0;

    // Phase 1: find the lowest cost path arriving at each position
    for cur in 0..=last_match_pos {
        if cost[cur + 1] > cost[cur] + LITERAL_COST {
            cost[cur + 1] = cost[cur] + LITERAL_COST;
            match_len[cur + 1] = 1;
        }

        if cur > next_match_cur {
            next_match_cur = cur;
        }

        let mut max_len = MIN_MATCH - 1;

        // pos is the root of the tree for this hash; cur becomes the new root
        let hash = hash3(&src[cur..], hash_bits) as usize;
        let mut pos = lookup[hash];
        lookup[hash] = cur as u32;

        // Links still to be filled in: the subtree of strings less than cur
        // and the subtree of strings greater than cur
        let mut lt_node = 2 * cur;
        let mut gt_node = 2 * cur + 1;
        let mut lt_len = 0;
        let mut gt_len = 0;

        debug_assert!(pos == NO_MATCH_POS || (pos as usize) < cur);

        // Full length while pricing matches, accept_len while only updating
        let len_left = (src_size - cur).min(MAX_MATCH);
        let len_limit = if cur == next_match_cur { len_left } else { accept_len.min(len_left) };
        let mut num_chain = max_depth;

        loop {
            // At the bottom of the tree, or out of depth: cut off whatever
            // has not been searched
            if pos == NO_MATCH_POS || cur - pos as usize > window_size || num_chain == 0 {
                nodes[lt_node] = NO_MATCH_POS;
                nodes[gt_node] = NO_MATCH_POS;
                break;
            }
            num_chain -= 1;

            let candidate = pos as usize;

            // The candidate sorts between two strings that matched cur for
            // lt_len and gt_len bytes, so it matches at least the shorter
            let mut len = lt_len.min(gt_len);
            while len < len_limit && src[candidate + len] == src[cur + len] {
                len += 1;
            }

            // Closest first, so only lengths past the current best are new
            if cur == next_match_cur && len > max_len {
                let offset = cur - candidate - 1;
                for i in max_len + 1..=len {
                    let cost_there = cost[cur] + match_cost_with(config, offset, i);
                    if cost_there < cost[cur + i] {
                        cost[cur + i] = cost_there;
                        match_offset[cur + i] = offset as u32;
                        match_len[cur + i] = i as u32;
                    }
                }

                max_len = len;

                if len >= accept_len {
                    next_match_cur = cur + len;
                }
            }

            // A full-length match is equal to cur, so cur takes over its
            // subtrees and the farther duplicate drops out of the tree
            if len >= accept_len || len == len_limit {
                nodes[lt_node] = nodes[2 * candidate];
                nodes[gt_node] = nodes[2 * candidate + 1];
                break;
            }

            if src[candidate + len] < src[cur + len] {
                // candidate and its left subtree are less than cur
                nodes[lt_node] = pos;
                lt_node = 2 * candidate + 1;
                pos = nodes[lt_node];
                lt_len = len;
            } else {
                // candidate and its right subtree are greater than cur
                nodes[gt_node] = pos;
                gt_node = 2 * candidate;
                pos = nodes[gt_node];
                gt_len = len;
            }

            debug_assert!(pos == NO_MATCH_POS || (pos as usize) < candidate);
        }
    }

    for cur in last_match_pos + 1..src_size {
        if cost[cur + 1] > cost[cur] + LITERAL_COST {
            cost[cur + 1] = cost[cur] + LITERAL_COST;
            match_len[cur + 1] = 1;
        }
    }

    // Phase 2: follow the lowest cost path backwards, packing the tokens
    // into the tail of the arrays
    let mut next_token = src_size;
    let mut cur = src_size;
    while cur > 0 {
        let len = match_len[cur];
        match_len[next_token] = len;
        match_offset[next_token] = match_offset[cur];
        cur -= len as usize;
        next_token -= 1;
    }

    // Phase 3: emit tokens
    let mut cur = 0;
    for i in next_token + 1..=src_size {
        let token = match match_len[i] as usize {
            1 => Token::Literal(src[cur]),
            length => Token::Match { offset: match_offset[i] as usize, length },
        };
        encode_token(&mut packer, config, token);
        cur += token.uncompressed_size();
    }

    packer.finalize()
}
