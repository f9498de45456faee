#![doc(html_root_url = "https://docs.rs/vidcore/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # vidcore - Block Codec Substrate
//!
//! `vidcore` provides the low-level pieces a block-based video codec is built
//! on: an entropy bitstream with marker-safe byte stuffing, a planar YUV 4:2:0
//! frame reader, and the PSNR/SSIM metrics used to judge encoded output.
//!
//! Transform, quantisation, motion estimation and symbol tables live above
//! this crate and only talk to it through the primitives below.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vidcore = "0.1.0"
//! ```
//!
//! ### Reading frames and scoring a round trip
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use vidcore::config::FrameGeometry;
//! use vidcore::format::yuv::FrameReader;
//! use vidcore::metrics::{FrameQuality, QualitySummary};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let geometry = FrameGeometry::new(352, 288)?;
//!     let original = FrameReader::new(BufReader::new(File::open("foreman.yuv")?), geometry);
//!     let decoded = FrameReader::new(BufReader::new(File::open("decoded.yuv")?), geometry);
//!
//!     let mut summary = QualitySummary::new();
//!     for (reference, frame) in original.zip(decoded) {
//!         summary.push(&FrameQuality::compare(&reference?, &frame?)?);
//!     }
//!     println!("{:?}", summary.average());
//!     Ok(())
//! }
//! ```
//!
//! ### Entropy bitstream
//!
//! ```rust
//! use std::io::Cursor;
//! use vidcore::codec::EntropyContext;
//!
//! # fn main() -> vidcore::Result<()> {
//! let mut writer = EntropyContext::new(Vec::new());
//! writer.put_bits(0xFF, 8)?;
//! writer.put_bits(0b01, 2)?;
//! writer.flush_bits()?;
//! let stream = writer.into_inner();
//! assert_eq!(stream, vec![0xFF, 0x00, 0b0100_0000]);
//!
//! let mut reader = EntropyContext::new(Cursor::new(stream));
//! assert_eq!(reader.get_bits(8)?, 0xFF);
//! assert_eq!(reader.get_bits(2)?, 0b01);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - `codec`: entropy bit packing with `0xFF 0x00` byte stuffing
//! - `format`: planar YUV 4:2:0 frames, padded planes, frame iteration
//! - `metrics`: PSNR, 8x8 block SSIM, frame and sequence summaries
//! - `config`: frame geometry and block padding
//! - `utils`: byte channel helpers over `std::io::Read` / `Write`
//! - `error`: the crate error type and `Result` alias
//!
//! All operations are synchronous and block on the underlying channel. A
//! context or reader owns its channel and is not meant to be shared between
//! threads without external locking.

/// Entropy bitstream coding
pub mod codec;

/// Frame geometry configuration
pub mod config;

/// Error types and utilities
pub mod error;

/// Raw media formats
pub mod format;

/// Objective quality metrics
pub mod metrics;

/// Byte channel helpers
pub mod utils;

pub use error::{Result, VidError};
