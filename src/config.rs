use crate::error::{Result, VidError};
use crate::format::yuv::Component;

/// Luma planes are padded to whole macroblocks.
pub const MACROBLOCK_SIZE: usize = 16;

/// Chroma planes are padded to whole transform blocks.
pub const BLOCK_SIZE: usize = 8;

/// Logical and padded dimensions of a planar YUV 4:2:0 frame.
///
/// The padded width of a plane is also its row stride in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    width: usize,
    height: usize,
    padded_width_y: usize,
    padded_height_y: usize,
    padded_width_chroma: usize,
    padded_height_chroma: usize,
}

fn round_up(value: usize, multiple: usize) -> usize {
    value.div_ceil(multiple) * multiple
}

impl FrameGeometry {
    /// Geometry for a `width` x `height` frame with codec block padding:
    /// luma rounded up to 16, chroma rounded up to 8.
    ///
    /// ```
    /// use vidcore::config::FrameGeometry;
    ///
    /// let geometry = FrameGeometry::new(352, 288).unwrap();
    /// assert_eq!(geometry.frame_size(), 352 * 288 * 3 / 2);
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_padding(
            width,
            height,
            round_up(width, MACROBLOCK_SIZE),
            round_up(height, MACROBLOCK_SIZE),
            round_up(width / 2, BLOCK_SIZE),
            round_up(height / 2, BLOCK_SIZE),
        )
    }

    /// Geometry with explicit padded dimensions for the luma and chroma planes.
    pub fn with_padding(
        width: usize,
        height: usize,
        padded_width_y: usize,
        padded_height_y: usize,
        padded_width_chroma: usize,
        padded_height_chroma: usize,
    ) -> Result<Self> {
        let invalid = |reason| VidError::InvalidDimensions {
            width,
            height,
            reason,
        };

        if width == 0 || height == 0 {
            return Err(invalid("width and height must not be zero"));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(invalid("4:2:0 frames need even width and height"));
        }
        if padded_width_y < width || padded_height_y < height {
            return Err(invalid("luma padding smaller than the frame"));
        }
        if padded_width_chroma < width / 2 || padded_height_chroma < height / 2 {
            return Err(invalid("chroma padding smaller than the chroma plane"));
        }

        Ok(Self {
            width,
            height,
            padded_width_y,
            padded_height_y,
            padded_width_chroma,
            padded_height_chroma,
        })
    }

    /// Logical luma width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical luma height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Logical `(width, height)` of a plane.
    pub fn plane_dims(&self, component: Component) -> (usize, usize) {
        match component {
            Component::Y => (self.width, self.height),
            Component::U | Component::V => (self.width / 2, self.height / 2),
        }
    }

    /// Padded `(width, height)` of a plane.
    pub fn padded_dims(&self, component: Component) -> (usize, usize) {
        match component {
            Component::Y => (self.padded_width_y, self.padded_height_y),
            Component::U | Component::V => (self.padded_width_chroma, self.padded_height_chroma),
        }
    }

    /// Samples in the logical luma plane.
    pub fn luma_size(&self) -> usize {
        self.width * self.height
    }

    /// Samples in each logical chroma plane.
    pub fn chroma_size(&self) -> usize {
        self.luma_size() / 4
    }

    /// Bytes one frame occupies in the raw planar stream.
    pub fn frame_size(&self) -> usize {
        self.luma_size() + 2 * self.chroma_size()
    }
}
