use thiserror::Error;

/// Errors produced by the bitstream, frame and metric primitives.
///
/// End of stream at a frame boundary is not an error; see
/// [`read_frame`](crate::format::yuv::read_frame).
#[derive(Error, Debug)]
pub enum VidError {
    /// The underlying byte channel failed. Terminal for the current operation.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The bitstream ended before a bit-level read could be satisfied.
    #[error("stream desync: needed {requested} bits but only {available} were left before end of stream")]
    StreamDesync {
        /// Bits asked for
        requested: u8,
        /// Bits held when the stream ran out
        available: u8,
    },

    /// The stream ended part way through a frame.
    #[error("truncated frame: expected {expected} bytes, read {read}")]
    TruncatedFrame {
        /// Bytes in a full frame
        expected: usize,
        /// Bytes actually read
        read: usize,
    },

    /// An exact byte read came up short.
    #[error("unexpected end of stream: expected {expected} bytes, read {read}")]
    UnexpectedEof {
        /// Bytes asked for
        expected: usize,
        /// Bytes actually read
        read: usize,
    },

    /// More bits requested than one packing call supports.
    #[error("invalid bit count {0}, must be at most 24")]
    InvalidBitCount(u8),

    /// Frame or plane dimensions the operation cannot handle.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Offending width
        width: usize,
        /// Offending height
        height: usize,
        /// What was wrong with them
        reason: &'static str,
    },

    /// A metric input is empty or shorter than the samples it must cover.
    #[error("not enough samples: required {required}, available {available}")]
    SampleCount {
        /// Samples needed
        required: usize,
        /// Samples present in the shorter input
        available: usize,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, VidError>;
