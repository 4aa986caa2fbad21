//! Structured events for pack and depack calls
//!
//! Compiled behind the `tracing` feature; without it every function is an
//! empty inline no-op.

#[cfg(feature = "tracing")]
const PACK_TARGET: &str = "crush::pack";

#[cfg(feature = "tracing")]
const DEPACK_TARGET: &str = "crush::depack";

/// Traces the start of a pack call after the level has been resolved.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pack_start(level: i32, src_size: usize, workmem_size: usize) {
    tracing::debug!(
        target: PACK_TARGET,
        level = level,
        src_size = src_size,
        workmem_size = workmem_size,
        "pack: starting"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pack_start(_level: i32, _src_size: usize, _workmem_size: usize) {}

/// Traces the packed size of a finished pack call.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pack_end(level: i32, src_size: usize, packed_size: usize) {
    tracing::debug!(
        target: PACK_TARGET,
        level = level,
        src_size = src_size,
        packed_size = packed_size,
        "pack: complete"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pack_end(_level: i32, _src_size: usize, _packed_size: usize) {}

/// Traces a level rejected before any output was written.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unsupported_level(level: i32) {
    tracing::debug!(target: PACK_TARGET, level = level, "pack: unsupported level");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_unsupported_level(_level: i32) {}

/// Traces a finished depack call.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_depack_end(packed_size: u64, depacked_size: usize) {
    tracing::debug!(
        target: DEPACK_TARGET,
        packed_size = packed_size,
        depacked_size = depacked_size,
        "depack: complete"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_depack_end(_packed_size: u64, _depacked_size: usize) {}
