//! Parsing strategies
//!
//! A strategy decides which bytes become literals and which become matches.
//! Both strategies price tokens with [`crate::format::match_cost_with`] and
//! emit them through the shared token encoder, so they differ only in how
//! they find candidates and how far they search.

pub mod binary_tree;
pub mod hash_chain;

use crate::format::{FormatConfig, WORD_SIZE};

/// Match finding strategy and its search limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Backwards parse over hash chains
    HashChain {
        /// Candidates examined per position
        max_depth: usize,
        /// Match length that ends a search early
        accept_len: usize,
    },
    /// Forwards parse over binary trees, considering every match
    Optimal,
}

impl Strategy {
    /// Scratch memory in `u32` words
    pub fn workmem_words(&self, config: &FormatConfig, src_size: usize) -> usize {
        match self {
            Self::HashChain { .. } => hash_chain::workmem_words(config, src_size),
            Self::Optimal => binary_tree::workmem_words(config, src_size),
        }
    }

    /// Scratch memory in bytes, saturating at `usize::MAX`
    pub fn workmem_size(&self, config: &FormatConfig, src_size: usize) -> usize {
        self.workmem_words(config, src_size).saturating_mul(WORD_SIZE)
    }

    /// Pack `src` into `dst`, returning the packed size
    pub fn pack(
        &self,
        config: &FormatConfig,
        src: &[u8],
        dst: &mut [u8],
        workmem: &mut [u32],
    ) -> usize {
        match *self {
            Self::HashChain { max_depth, accept_len } => {
                hash_chain::pack(config, src, dst, workmem, max_depth, accept_len)
            }
            Self::Optimal => binary_tree::pack(config, src, dst, workmem, usize::MAX, usize::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workmem_size_is_words() {
        let config = FormatConfig::default();
        let chain = Strategy::HashChain { max_depth: 1, accept_len: 16 };
        assert_eq!(chain.workmem_size(&config, 1000), (1000 + (1 << 17)) * 4);
        assert_eq!(Strategy::Optimal.workmem_size(&config, 1000), (5003 + (1 << 17)) * 4);
    }

    #[test]
    fn test_hash_bits_changes_workmem() {
        let small = FormatConfig::default().with_hash_bits(10).unwrap();
        let large = FormatConfig::default();
        for strategy in [Strategy::HashChain { max_depth: 8, accept_len: 32 }, Strategy::Optimal] {
            assert!(strategy.workmem_words(&small, 100) < strategy.workmem_words(&large, 100));
        }
    }
}
