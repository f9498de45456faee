//! Raw media formats.

pub mod yuv;

pub use self::yuv::{read_frame, Component, Frame, FrameReader, Plane};
