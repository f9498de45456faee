use crate::error::{Result, VidError};

/// Squared peak value of an 8-bit sample, `255^2`.
pub const PEAK_SIGNAL_SQUARED: f64 = 65025.0;

/// Stand-in for a zero MSE so identical inputs give a large finite PSNR.
pub const MSE_FLOOR: f64 = 1e-10;

pub(crate) fn check_samples(reference: &[u8], comparison: &[u8], required: usize) -> Result<()> {
    let available = reference.len().min(comparison.len());
    if required == 0 || available < required {
        return Err(VidError::SampleCount {
            required: required.max(1),
            available,
        });
    }
    Ok(())
}

/// Mean squared error over the first `pixel_count` samples.
pub fn mse(reference: &[u8], comparison: &[u8], pixel_count: usize) -> Result<f64> {
    check_samples(reference, comparison, pixel_count)?;

    let sum: u64 = reference[..pixel_count]
        .iter()
        .zip(&comparison[..pixel_count])
        .map(|(&r, &c)| {
            let diff = i32::from(r) - i32::from(c);
            (diff * diff) as u64
        })
        .sum();

    Ok(sum as f64 / pixel_count as f64)
}

/// Peak signal-to-noise ratio in decibels over the first `pixel_count`
/// samples of two 8-bit planes.
///
/// A zero MSE is replaced by [`MSE_FLOOR`], so identical inputs score about
/// 148 dB instead of infinity.
///
/// ```
/// use vidcore::metrics::psnr;
///
/// let db = psnr(&[10, 20, 30, 40], &[12, 18, 33, 37], 4).unwrap();
/// assert!((db - 40.0).abs() < 0.01);
/// ```
pub fn psnr(reference: &[u8], comparison: &[u8], pixel_count: usize) -> Result<f64> {
    let mut mse = mse(reference, comparison, pixel_count)?;
    if mse == 0.0 {
        mse = MSE_FLOOR;
    }
    Ok(10.0 * (PEAK_SIGNAL_SQUARED / mse).log10())
}
