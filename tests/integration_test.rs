#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Cursor, Write};
    use std::path::PathBuf;
    use vidcore::codec::EntropyContext;
    use vidcore::config::FrameGeometry;
    use vidcore::error::{Result, VidError};
    use vidcore::format::yuv::{read_frame, Component, Frame, FrameReader};
    use vidcore::metrics::{FrameQuality, QualitySummary};

    const WIDTH: usize = 32;
    const HEIGHT: usize = 16;
    const FRAMES: usize = 4;
    const QUANT_BITS: u8 = 6;

    fn test_output_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("vidcore_test_output");
        fs::create_dir_all(&dir).expect("create test output dir");
        dir.join(format!("{}_{}.yuv", name, std::process::id()))
    }

    /// Moving diagonal pattern, one frame per `t`.
    fn synthetic_sequence(geometry: &FrameGeometry) -> Vec<u8> {
        let mut out = Vec::with_capacity(geometry.frame_size() * FRAMES);
        for t in 0..FRAMES {
            for i in 0..geometry.frame_size() {
                out.push(((i + t * 13) % 256) as u8);
            }
        }
        out
    }

    /// Quantises every sample to `QUANT_BITS` and packs it into an entropy stream.
    fn encode(frame: &Frame) -> Result<Vec<u8>> {
        let mut ctx = EntropyContext::new(Vec::new());
        for component in Component::ALL {
            for row in frame.plane(component).rows() {
                for &sample in row {
                    ctx.put_bits(u16::from(sample >> (8 - QUANT_BITS)), QUANT_BITS)?;
                }
            }
            // Planes start on a byte boundary
            ctx.flush_bits()?;
        }
        Ok(ctx.into_inner())
    }

    /// Unpacks an `encode`d stream straight into raw planar YUV bytes.
    fn decode(stream: Vec<u8>, geometry: &FrameGeometry) -> Result<Vec<u8>> {
        let mut ctx = EntropyContext::new(Cursor::new(stream));
        let mut raw = Vec::with_capacity(geometry.frame_size());
        for component in Component::ALL {
            let (width, height) = geometry.plane_dims(component);
            for _ in 0..width * height {
                let value = ctx.get_bits(QUANT_BITS)? as u8;
                raw.push(value << (8 - QUANT_BITS));
            }
            ctx.align_to_byte();
        }
        Ok(raw)
    }

    #[test]
    fn test_encode_decode_sequence() -> Result<()> {
        let geometry = FrameGeometry::new(WIDTH, HEIGHT)?;
        let source = synthetic_sequence(&geometry);

        let mut summary = QualitySummary::new();
        let mut decoded_stream = Vec::new();
        for frame in FrameReader::new(Cursor::new(source.clone()), geometry) {
            let frame = frame?;
            let raw = decode(encode(&frame)?, &geometry)?;
            let decoded = read_frame(&mut Cursor::new(&raw), &geometry)?
                .expect("decoded frame is complete");

            let quality = FrameQuality::compare(&frame, &decoded)?;
            assert!(quality.psnr_y > 30.0, "PSNR_Y too low: {}", quality.psnr_y);
            assert!(quality.psnr_y < 100.0);
            assert!(quality.ssim_y.expect("32x16 luma is block aligned") > 0.9);
            summary.push(&quality);

            decoded.write_to(&mut decoded_stream)?;
        }

        assert_eq!(summary.frames(), FRAMES);
        assert_eq!(decoded_stream.len(), source.len());

        let average = summary.average().expect("frames were scored");
        assert!(average.psnr > 30.0);
        Ok(())
    }

    #[test]
    fn test_frames_from_file() -> Result<()> {
        let geometry = FrameGeometry::new(WIDTH, HEIGHT)?;
        let path = test_output_path("frames_from_file");
        let source = synthetic_sequence(&geometry);

        {
            let mut out = BufWriter::new(File::create(&path)?);
            out.write_all(&source)?;
            out.flush()?;
        }

        let reader = FrameReader::new(BufReader::new(File::open(&path)?), geometry);
        let frames = reader.collect::<Result<Vec<_>>>()?;
        assert_eq!(frames.len(), FRAMES);

        let mut rewritten = Vec::new();
        for frame in &frames {
            frame.write_to(&mut rewritten)?;
        }
        assert_eq!(rewritten, source);

        // Lossless copy scores on the epsilon floor
        let quality = FrameQuality::compare(&frames[0], &frames[0].clone())?;
        assert!(quality.psnr >= 100.0);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_truncated_file() -> Result<()> {
        let geometry = FrameGeometry::new(WIDTH, HEIGHT)?;
        let path = test_output_path("truncated_file");
        let mut source = synthetic_sequence(&geometry);
        source.truncate(geometry.frame_size() + geometry.luma_size());
        fs::write(&path, &source)?;

        let mut reader = FrameReader::new(BufReader::new(File::open(&path)?), geometry);
        assert!(reader.read_frame()?.is_some());
        match reader.read_frame() {
            Err(VidError::TruncatedFrame { expected, read }) => {
                assert_eq!(expected, geometry.frame_size());
                assert_eq!(read, geometry.luma_size());
            }
            other => panic!("expected truncated frame, got {:?}", other),
        }

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_bitstream_through_file() -> Result<()> {
        let path = test_output_path("bitstream");
        let fields: Vec<(u16, u8)> = (0..200u16)
            .map(|i| (i.wrapping_mul(0x9E37), (i % 25) as u8))
            .chain([(0xFFFF, 16), (0xFF, 8), (0x7F, 7)])
            .collect();

        let mut writer = EntropyContext::new(BufWriter::new(File::create(&path)?));
        for &(bits, n) in &fields {
            writer.put_bits(bits, n)?;
        }
        writer.flush_bits()?;
        writer.get_mut().flush()?;
        drop(writer);

        let mut reader = EntropyContext::new(BufReader::new(File::open(&path)?));
        for &(bits, n) in &fields {
            let mask = (1u32 << n) - 1;
            assert_eq!(reader.get_bits(n)?, u32::from(bits) & mask);
        }
        assert!(matches!(
            reader.get_bits(8),
            Err(VidError::StreamDesync { .. })
        ));

        fs::remove_file(&path)?;
        Ok(())
    }
}
