use bytes::BytesMut;
use std::io::Read;

use super::frame::{Component, Frame, Plane};
use crate::config::FrameGeometry;
use crate::error::{Result, VidError};
use crate::utils::read_full;

/// Reads one planar YUV 4:2:0 frame from `reader`.
///
/// Outcomes:
/// - `Ok(Some(frame))` when exactly `geometry.frame_size()` bytes were read.
/// - `Ok(None)` when the stream was already exhausted (zero bytes read).
/// - `Err(VidError::TruncatedFrame)` when the stream ended part way through.
/// - `Err(VidError::Io)` when the channel failed.
///
/// Planes are zero-filled to their padded size before the logical rows are
/// read in. Nothing is returned on failure.
pub fn read_frame<R: Read + ?Sized>(
    reader: &mut R,
    geometry: &FrameGeometry,
) -> Result<Option<Frame>> {
    let mut read = 0;

    let y = read_plane(reader, geometry, Component::Y, &mut read)?;
    let u = read_plane(reader, geometry, Component::U, &mut read)?;
    let v = read_plane(reader, geometry, Component::V, &mut read)?;

    if read == 0 {
        log::debug!("end of stream at frame boundary");
        return Ok(None);
    }

    let expected = geometry.frame_size();
    if read != expected {
        log::warn!(
            "reached end of stream after {} of {} frame bytes, wrong input? (width: {} height: {})",
            read,
            expected,
            geometry.width(),
            geometry.height()
        );
        return Err(VidError::TruncatedFrame { expected, read });
    }

    Ok(Some(Frame { y, u, v }))
}

fn read_plane<R: Read + ?Sized>(
    reader: &mut R,
    geometry: &FrameGeometry,
    component: Component,
    read: &mut usize,
) -> Result<Plane> {
    let (width, height) = geometry.plane_dims(component);
    let (stride, padded_height) = geometry.padded_dims(component);

    let mut buf = BytesMut::zeroed(stride * padded_height);
    for y in 0..height {
        let start = y * stride;
        let n = read_full(reader, &mut buf[start..start + width])?;
        *read += n;
        if n < width {
            break;
        }
    }

    Ok(Plane::new(buf.freeze(), width, height, stride, padded_height))
}

/// Pulls consecutive frames of one geometry from a byte channel.
///
/// ```
/// use std::io::Cursor;
/// use vidcore::config::FrameGeometry;
/// use vidcore::format::yuv::FrameReader;
///
/// # fn main() -> vidcore::Result<()> {
/// let geometry = FrameGeometry::new(16, 16)?;
/// let stream = vec![0x80u8; geometry.frame_size() * 2];
///
/// let reader = FrameReader::new(Cursor::new(stream), geometry);
/// let frames = reader.collect::<vidcore::Result<Vec<_>>>()?;
/// assert_eq!(frames.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FrameReader<R> {
    reader: R,
    geometry: FrameGeometry,
    frames_read: u64,
    done: bool,
}

impl<R: Read> FrameReader<R> {
    /// Wraps `reader`; every frame has `geometry`.
    pub fn new(reader: R, geometry: FrameGeometry) -> Self {
        Self {
            reader,
            geometry,
            frames_read: 0,
            done: false,
        }
    }

    /// Geometry of the frames being read.
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Frames successfully returned so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Unwraps the channel.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next frame. See [`read_frame`].
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        let frame = read_frame(&mut self.reader, &self.geometry)?;
        if frame.is_some() {
            self.frames_read += 1;
            log::debug!("read frame {}", self.frames_read);
        }
        Ok(frame)
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame>;

    /// Yields frames until clean end of stream. An error is yielded once and
    /// ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
