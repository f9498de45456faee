use std::io::{Read, Write};

use crate::error::{Result, VidError};
use crate::utils::{put_byte, put_bytes, read_full};

/// Largest field `put_bits` / `get_bits` accept in one call.
pub const MAX_BITS: u8 = 24;

/// Byte value reserved for stream markers. Every data byte equal to it is
/// followed by a stuffed `0x00` on the wire.
pub const MARKER_BYTE: u8 = 0xFF;

/// Bit accumulator bound to one byte channel.
///
/// Writing packs fields MSB first into the accumulator and emits every
/// completed byte, inserting a `0x00` after each `0xFF`. Reading pulls bytes
/// into the low end of the accumulator, dropping the stuffed byte after each
/// `0xFF`, and hands back the top bits.
///
/// The writer methods need `C: Write`, the reader methods `C: Read`; a
/// context is used for one direction only. Between calls fewer than 8 bits
/// are ever held.
///
/// Example:
/// ```
/// use std::io::Cursor;
/// use vidcore::codec::EntropyContext;
///
/// # fn main() -> vidcore::Result<()> {
/// let mut writer = EntropyContext::new(Vec::new());
/// writer.put_bits(0b101, 3)?;
/// writer.put_bits(0xFF, 8)?;
/// writer.flush_bits()?;
/// let bytes = writer.into_inner();
/// assert_eq!(bytes, vec![0b1011_1111, 0b1110_0000]);
///
/// let mut reader = EntropyContext::new(Cursor::new(bytes));
/// assert_eq!(reader.get_bits(3)?, 0b101);
/// assert_eq!(reader.get_bits(8)?, 0xFF);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EntropyContext<C> {
    channel: C,
    bit_buffer: u32,
    bit_buffer_width: u8,
}

/// Mask with the low `width` bits set. `width` stays below 32.
fn low_mask(width: u8) -> u32 {
    (1u32 << width) - 1
}

impl<C> EntropyContext<C> {
    /// Creates an empty context over `channel`.
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            bit_buffer: 0,
            bit_buffer_width: 0,
        }
    }

    /// Number of bits currently held in the accumulator.
    pub fn pending_bits(&self) -> u8 {
        self.bit_buffer_width
    }

    /// Returns true when no bits are held.
    pub fn is_aligned(&self) -> bool {
        self.bit_buffer_width == 0
    }

    /// Borrows the underlying channel.
    pub fn get_ref(&self) -> &C {
        &self.channel
    }

    /// Mutably borrows the underlying channel.
    ///
    /// Call [`flush_bits`](Self::flush_bits) first when writing, otherwise
    /// direct writes land ahead of bits still held in the accumulator.
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Unwraps the channel. Held bits are dropped.
    pub fn into_inner(self) -> C {
        self.channel
    }

    fn check_bit_count(n: u8) -> Result<()> {
        if n > MAX_BITS {
            return Err(VidError::InvalidBitCount(n));
        }
        Ok(())
    }
}

impl<C: Write> EntropyContext<C> {
    /// Appends the low `n` bits of `bits`, MSB first.
    ///
    /// Completed bytes go to the channel immediately. `n == 0` is a no-op,
    /// `n > 24` is rejected with [`VidError::InvalidBitCount`].
    pub fn put_bits(&mut self, bits: u16, n: u8) -> Result<()> {
        Self::check_bit_count(n)?;
        if n == 0 {
            return Ok(());
        }

        self.bit_buffer = (self.bit_buffer << n) | (u32::from(bits) & low_mask(n));
        self.bit_buffer_width += n;

        while self.bit_buffer_width >= 8 {
            let byte = (self.bit_buffer >> (self.bit_buffer_width - 8)) as u8;
            self.emit(byte)?;
            self.bit_buffer_width -= 8;
        }
        self.bit_buffer &= low_mask(self.bit_buffer_width);

        Ok(())
    }

    /// Pads the held bits with zeros to a full byte and emits it.
    ///
    /// Does nothing on an aligned context. The accumulator is empty afterwards.
    pub fn flush_bits(&mut self) -> Result<()> {
        if self.bit_buffer_width > 0 {
            let byte = (self.bit_buffer << (8 - self.bit_buffer_width)) as u8;
            log::trace!(
                "flushing {} pending bits as {:#04x}",
                self.bit_buffer_width,
                byte
            );
            self.emit(byte)?;
        }

        self.bit_buffer = 0;
        self.bit_buffer_width = 0;
        Ok(())
    }

    fn emit(&mut self, byte: u8) -> Result<()> {
        if byte == MARKER_BYTE {
            put_bytes(&mut self.channel, &[MARKER_BYTE, 0x00])
        } else {
            put_byte(&mut self.channel, byte)
        }
    }
}

impl<C: Read> EntropyContext<C> {
    /// Reads `n` bits, MSB first.
    ///
    /// Running out of stream before `n` bits are available is a
    /// [`VidError::StreamDesync`]. `n == 0` returns 0 without touching the
    /// channel.
    pub fn get_bits(&mut self, n: u8) -> Result<u32> {
        Self::check_bit_count(n)?;
        if n == 0 {
            return Ok(0);
        }

        while self.bit_buffer_width < n {
            let byte = self.pull_byte(n)?;
            self.bit_buffer = (self.bit_buffer << 8) | u32::from(byte);
            self.bit_buffer_width += 8;
        }

        let value = (self.bit_buffer >> (self.bit_buffer_width - n)) & low_mask(n);
        self.bit_buffer_width -= n;
        self.bit_buffer &= low_mask(self.bit_buffer_width);

        Ok(value)
    }

    /// Drops the bits left over from a partially consumed byte, so the next
    /// read starts on the byte following a writer's `flush_bits`.
    pub fn align_to_byte(&mut self) {
        self.bit_buffer_width -= self.bit_buffer_width % 8;
        self.bit_buffer &= low_mask(self.bit_buffer_width);
    }

    fn pull_byte(&mut self, requested: u8) -> Result<u8> {
        let mut byte = [0u8; 1];
        if read_full(&mut self.channel, &mut byte)? == 0 {
            return Err(self.desync(requested));
        }

        if byte[0] == MARKER_BYTE {
            let mut stuffed = [0u8; 1];
            if read_full(&mut self.channel, &mut stuffed)? == 0 {
                return Err(self.desync(requested));
            }
            if stuffed[0] != 0x00 {
                log::warn!("expected stuffed 0x00 after 0xff, found {:#04x}", stuffed[0]);
            }
        }

        Ok(byte[0])
    }

    fn desync(&self, requested: u8) -> VidError {
        VidError::StreamDesync {
            requested,
            available: self.bit_buffer_width,
        }
    }
}
