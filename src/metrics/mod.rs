//! # Objective Quality Metrics
//!
//! PSNR and block SSIM over 8-bit sample planes, plus per-frame and
//! per-sequence summaries for planar YUV frames. Nothing here does I/O.
//!
//! ```rust
//! use vidcore::metrics::{psnr, ssim_8x8};
//!
//! # fn main() -> vidcore::Result<()> {
//! let reference = vec![128u8; 64];
//! let decoded = vec![130u8; 64];
//!
//! let db = psnr(&reference, &decoded, reference.len())?;
//! let ssim = ssim_8x8(&reference, &decoded, 8, 8)?;
//! assert!(db > 40.0);
//! assert!(ssim > 0.99);
//! # Ok(())
//! # }
//! ```

/// Peak signal-to-noise ratio
pub mod psnr;
/// Frame and sequence quality summaries
pub mod quality;
/// Structural similarity over 8x8 blocks
pub mod ssim;

pub use psnr::{mse, psnr, MSE_FLOOR, PEAK_SIGNAL_SQUARED};
pub use quality::{FrameQuality, QualitySummary};
pub use ssim::ssim_8x8;
