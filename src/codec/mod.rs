//! # Entropy Bitstream Coding
//!
//! Raw bit packing for the entropy stage of a block codec. Symbol tables
//! (Huffman/VLC) sit above this layer and only see `put_bits` / `get_bits`.
//!
//! ## Wire format
//!
//! - Fields are packed MSB first, big-endian across byte boundaries.
//! - Every emitted `0xFF` byte is followed by a stuffed `0x00` so that data
//!   never imitates a marker. The reader drops the stuffed byte.
//! - `flush_bits` pads the last partial byte with zero bits.

/// Bit accumulator with marker-safe byte stuffing
pub mod entropy;

pub use entropy::{EntropyContext, MARKER_BYTE, MAX_BITS};
