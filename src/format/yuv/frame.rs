use bytes::Bytes;
use std::io::Write;

use crate::error::Result;
use crate::utils::put_bytes;

/// Plane index within a 4:2:0 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Luma
    Y,
    /// Blue-difference chroma
    U,
    /// Red-difference chroma
    V,
}

impl Component {
    /// Planes in stream order.
    pub const ALL: [Component; 3] = [Component::Y, Component::U, Component::V];
}

/// One plane of 8-bit samples.
///
/// The buffer covers the padded area, `stride() * padded_height()` bytes.
/// Logical row `r` starts at `r * stride()`; samples outside the logical
/// region are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    data: Bytes,
    width: usize,
    height: usize,
    stride: usize,
    padded_height: usize,
}

impl Plane {
    pub(crate) fn new(
        data: Bytes,
        width: usize,
        height: usize,
        stride: usize,
        padded_height: usize,
    ) -> Self {
        debug_assert_eq!(data.len(), stride * padded_height);
        Self {
            data,
            width,
            height,
            stride,
            padded_height,
        }
    }

    /// Logical width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Padded width, which is also the row stride.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Padded height in rows.
    pub fn padded_height(&self) -> usize {
        self.padded_height
    }

    /// The whole padded buffer.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Logical samples of row `y`.
    ///
    /// # Panics
    ///
    /// If `y` is not below `height()`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {} out of range", y);
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Iterates the logical rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copies the logical region into a tightly packed buffer.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.stride == self.width {
            return self.data[..self.width * self.height].to_vec();
        }

        let mut packed = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            packed.extend_from_slice(row);
        }
        packed
    }
}

/// A planar YUV 4:2:0 frame.
///
/// Owned by whoever read it; dropping it releases all three planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Luma plane
    pub y: Plane,
    /// U chroma plane
    pub u: Plane,
    /// V chroma plane
    pub v: Plane,
}

impl Frame {
    /// Borrows the plane for `component`.
    pub fn plane(&self, component: Component) -> &Plane {
        match component {
            Component::Y => &self.y,
            Component::U => &self.u,
            Component::V => &self.v,
        }
    }

    /// Writes the logical Y, U and V regions in raw planar order, the
    /// inverse of [`read_frame`](super::read_frame).
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        for component in Component::ALL {
            for row in self.plane(component).rows() {
                put_bytes(writer, row)?;
            }
        }
        Ok(())
    }
}
