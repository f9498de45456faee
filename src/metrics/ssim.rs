use super::psnr::check_samples;
use crate::error::{Result, VidError};

/// `(0.01 * 255)^2`
pub const C1: f64 = 6.5025;

/// `(0.03 * 255)^2`
pub const C2: f64 = 58.5225;

const BLOCK: usize = 8;
const BLOCK_SAMPLES: f64 = (BLOCK * BLOCK) as f64;

/// Mean structural similarity over non-overlapping 8x8 blocks.
///
/// Both planes are `width` x `height`, tightly packed. Each block yields
/// `((2·μr·μc + C1)(2·σrc + C2)) / ((μr² + μc² + C1)(σr² + σc² + C2))`
/// and the result is the plain mean over all blocks.
///
/// `width` and `height` must be non-zero multiples of 8.
pub fn ssim_8x8(reference: &[u8], comparison: &[u8], width: usize, height: usize) -> Result<f64> {
    if width == 0 || height == 0 || width % BLOCK != 0 || height % BLOCK != 0 {
        return Err(VidError::InvalidDimensions {
            width,
            height,
            reason: "ssim needs non-zero multiples of 8",
        });
    }
    check_samples(reference, comparison, width * height)?;

    let mut sum = 0.0;
    for y in (0..height).step_by(BLOCK) {
        for x in (0..width).step_by(BLOCK) {
            sum += block_ssim(reference, comparison, y * width + x, width);
        }
    }

    let blocks = (width / BLOCK) * (height / BLOCK);
    Ok(sum / blocks as f64)
}

fn block_ssim(reference: &[u8], comparison: &[u8], offset: usize, stride: usize) -> f64 {
    let mut ref_acc = 0u32;
    let mut ref_acc_2 = 0u32;
    let mut cmp_acc = 0u32;
    let mut cmp_acc_2 = 0u32;
    let mut ref_cmp_acc = 0u32;

    for j in 0..BLOCK {
        let start = offset + j * stride;
        let rows = reference[start..start + BLOCK]
            .iter()
            .zip(&comparison[start..start + BLOCK]);
        for (&r, &c) in rows {
            let (r, c) = (u32::from(r), u32::from(c));
            ref_acc += r;
            ref_acc_2 += r * r;
            cmp_acc += c;
            cmp_acc_2 += c * c;
            ref_cmp_acc += r * c;
        }
    }

    let ref_avg = f64::from(ref_acc) / BLOCK_SAMPLES;
    let cmp_avg = f64::from(cmp_acc) / BLOCK_SAMPLES;
    let ref_var = f64::from(ref_acc_2) / BLOCK_SAMPLES - ref_avg * ref_avg;
    let cmp_var = f64::from(cmp_acc_2) / BLOCK_SAMPLES - cmp_avg * cmp_avg;
    let ref_cmp_cov = f64::from(ref_cmp_acc) / BLOCK_SAMPLES - ref_avg * cmp_avg;

    let num = (2.0 * ref_avg * cmp_avg + C1) * (2.0 * ref_cmp_cov + C2);
    let den = (ref_avg * ref_avg + cmp_avg * cmp_avg + C1) * (ref_var + cmp_var + C2);
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    /// Block-aligned plane with random content.
    #[derive(Debug, Clone)]
    struct AlignedPlane {
        width: usize,
        height: usize,
        samples: Vec<u8>,
    }

    impl Arbitrary for AlignedPlane {
        fn arbitrary(g: &mut Gen) -> Self {
            let width = 8 * (usize::arbitrary(g) % 4 + 1);
            let height = 8 * (usize::arbitrary(g) % 4 + 1);
            let samples = (0..width * height).map(|_| u8::arbitrary(g)).collect();
            Self {
                width,
                height,
                samples,
            }
        }
    }

    fn gradient(width: usize, height: usize) -> Vec<u8> {
        (0..width * height)
            .map(|i| ((i % width) * 4 + (i / width) * 3) as u8)
            .collect()
    }

    #[test]
    fn test_identical_is_one() {
        let plane = gradient(32, 16);
        let score = ssim_8x8(&plane, &plane, 32, 16).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_flat_blocks() {
        let black = vec![0u8; 64];
        let white = vec![255u8; 64];
        let score = ssim_8x8(&black, &white, 8, 8).unwrap();
        assert!((score - C1 / (65025.0 + C1)).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_blocks() {
        // Left block identical, right block black against white
        let mut reference = vec![0u8; 16 * 8];
        let mut comparison = vec![0u8; 16 * 8];
        for y in 0..8 {
            for x in 0..8 {
                reference[y * 16 + x] = (x * 20 + y) as u8;
                comparison[y * 16 + x] = (x * 20 + y) as u8;
                comparison[y * 16 + 8 + x] = 255;
            }
        }

        let score = ssim_8x8(&reference, &comparison, 16, 8).unwrap();
        let right = C1 / (65025.0 + C1);
        assert!((score - (1.0 + right) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_noise_lowers_score() {
        let reference = gradient(16, 16);
        let comparison: Vec<u8> = reference
            .iter()
            .enumerate()
            .map(|(i, &s)| if i % 3 == 0 { s.wrapping_add(40) } else { s })
            .collect();

        let score = ssim_8x8(&reference, &comparison, 16, 16).unwrap();
        assert!(score < 1.0);
        assert!(score > 0.0);
    }

    #[test]
    fn test_rejects_unaligned_dimensions() {
        let plane = vec![0u8; 12 * 8];
        assert!(matches!(
            ssim_8x8(&plane, &plane, 12, 8),
            Err(VidError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ssim_8x8(&plane, &plane, 0, 8),
            Err(VidError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ssim_8x8(&plane, &plane, 16, 8),
            Err(VidError::SampleCount { .. })
        ));
    }

    #[quickcheck]
    fn prop_identical_is_one(plane: AlignedPlane) -> bool {
        let score = ssim_8x8(&plane.samples, &plane.samples, plane.width, plane.height).unwrap();
        (score - 1.0).abs() < 1e-9
    }
}
