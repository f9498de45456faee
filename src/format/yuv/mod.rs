//! # Planar YUV 4:2:0
//!
//! Raw planar frames with no header: `width*height` Y samples, then
//! `(width*height)/4` U samples, then `(width*height)/4` V samples, row-major.
//!
//! Reading a frame has three outcomes. A full frame is returned as
//! `Ok(Some(frame))`. A stream that is already exhausted gives `Ok(None)`,
//! which is the normal end of a sequence. A stream that ends inside a frame
//! gives [`VidError::TruncatedFrame`](crate::VidError::TruncatedFrame) and no
//! partial frame.
//!
//! ```rust
//! use std::io::Cursor;
//! use vidcore::config::FrameGeometry;
//! use vidcore::format::yuv::read_frame;
//!
//! # fn main() -> vidcore::Result<()> {
//! let geometry = FrameGeometry::new(8, 8)?;
//! let mut stream = Cursor::new(vec![16u8; geometry.frame_size()]);
//!
//! let frame = read_frame(&mut stream, &geometry)?.expect("one frame");
//! assert_eq!(frame.y.row(0), &[16u8; 8][..]);
//! assert!(read_frame(&mut stream, &geometry)?.is_none());
//! # Ok(())
//! # }
//! ```

mod frame;
mod reader;

pub use frame::{Component, Frame, Plane};
pub use reader::{read_frame, FrameReader};
