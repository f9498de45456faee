//! # Utility Functions and Types
//!
//! Byte channel helpers shared by the entropy coder and the frame reader.
//!
//! Any [`std::io::Read`] serves as the read side of a byte channel and any
//! [`std::io::Write`] as the write side. `Ok(0)` from `read` is end of stream,
//! an `Err` is a terminal channel error. In-memory channels such as
//! `std::io::Cursor` or `Vec<u8>` work the same as files or sockets.
//!
//! ```rust
//! use std::io::Cursor;
//! use vidcore::utils::{get_byte, put_bytes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut out = Vec::new();
//! put_bytes(&mut out, &[0x12, 0x34])?;
//!
//! let mut reader = Cursor::new(out);
//! assert_eq!(get_byte(&mut reader)?, 0x12);
//! # Ok(())
//! # }
//! ```

/// Sequential byte channel helpers
pub mod channel;

pub use channel::*;
