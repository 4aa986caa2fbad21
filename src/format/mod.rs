pub mod config;
pub mod cost;
pub mod encode;
pub mod tables;
pub mod tokens;

pub use config::*;
pub use cost::{match_cost, match_cost_with};
pub use encode::{encode_literal, encode_match, encode_token};
pub use tables::{decode_length, encode_length, DistanceSlot, LengthClass, LengthCode, LENGTH_CODES};
pub use tokens::Token;
