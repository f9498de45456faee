use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, VidError};

/// Reads until `buf` is full or the channel reports end of stream.
///
/// Returns the number of bytes actually read. A short count means the
/// channel hit end of stream; a hard error is returned as-is and any bytes
/// already read are discarded by the caller. `Interrupted` is retried.
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(VidError::Io(e)),
        }
    }

    Ok(filled)
}

/// Writes a single byte to the channel.
pub fn put_byte<W: Write + ?Sized>(writer: &mut W, byte: u8) -> Result<()> {
    writer.write_all(&[byte])?;
    Ok(())
}

/// Writes all of `data` to the channel.
pub fn put_bytes<W: Write + ?Sized>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(data)?;
    Ok(())
}

/// Reads a single byte, failing with [`VidError::UnexpectedEof`] at end of stream.
pub fn get_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    match read_full(reader, &mut byte)? {
        1 => Ok(byte[0]),
        read => Err(VidError::UnexpectedEof { expected: 1, read }),
    }
}

/// Fills `buf` completely or fails with [`VidError::UnexpectedEof`].
pub fn read_bytes<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let read = read_full(reader, buf)?;
    if read != buf.len() {
        return Err(VidError::UnexpectedEof {
            expected: buf.len(),
            read,
        });
    }
    Ok(())
}
