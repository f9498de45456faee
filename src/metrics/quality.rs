use super::{psnr, ssim_8x8};
use crate::error::{Result, VidError};
use crate::format::yuv::{Component, Frame};

/// Quality of one decoded frame against its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameQuality {
    /// Luma PSNR in dB.
    pub psnr_y: f64,
    /// U plane PSNR in dB.
    pub psnr_u: f64,
    /// V plane PSNR in dB.
    pub psnr_v: f64,
    /// Luma-weighted PSNR, `(4·Y + U + V) / 6`.
    pub psnr: f64,
    /// Luma SSIM, present when the luma plane is block aligned.
    pub ssim_y: Option<f64>,
}

impl FrameQuality {
    /// Scores the logical region of every plane of `comparison` against
    /// `reference`. Both frames must have the same logical dimensions.
    pub fn compare(reference: &Frame, comparison: &Frame) -> Result<Self> {
        let mut scores = [0.0; 3];
        for (score, component) in scores.iter_mut().zip(Component::ALL) {
            let r = reference.plane(component);
            let c = comparison.plane(component);
            if (r.width(), r.height()) != (c.width(), c.height()) {
                return Err(VidError::InvalidDimensions {
                    width: c.width(),
                    height: c.height(),
                    reason: "frame dimensions differ from reference",
                });
            }

            let (r, c) = (r.to_packed(), c.to_packed());
            *score = psnr(&r, &c, r.len())?;
        }

        let y = &reference.y;
        let ssim_y = if y.width() % 8 == 0 && y.height() % 8 == 0 {
            Some(ssim_8x8(
                &y.to_packed(),
                &comparison.y.to_packed(),
                y.width(),
                y.height(),
            )?)
        } else {
            None
        };

        let [psnr_y, psnr_u, psnr_v] = scores;
        let quality = Self {
            psnr_y,
            psnr_u,
            psnr_v,
            psnr: (4.0 * psnr_y + psnr_u + psnr_v) / 6.0,
            ssim_y,
        };
        log::debug!(
            "PSNR_Y:{:2.2}, PSNR_U:{:2.2}, PSNR_V:{:2.2}, PSNR:{:2.2}, SSIM_Y:{:?}",
            quality.psnr_y,
            quality.psnr_u,
            quality.psnr_v,
            quality.psnr,
            quality.ssim_y
        );
        Ok(quality)
    }
}

/// Running averages over a sequence of frames.
#[derive(Debug, Clone, Default)]
pub struct QualitySummary {
    frames: usize,
    psnr_y: f64,
    psnr_u: f64,
    psnr_v: f64,
    psnr: f64,
    ssim_frames: usize,
    ssim_y: f64,
}

impl QualitySummary {
    /// Empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one frame's scores.
    pub fn push(&mut self, quality: &FrameQuality) {
        self.frames += 1;
        self.psnr_y += quality.psnr_y;
        self.psnr_u += quality.psnr_u;
        self.psnr_v += quality.psnr_v;
        self.psnr += quality.psnr;
        if let Some(ssim) = quality.ssim_y {
            self.ssim_frames += 1;
            self.ssim_y += ssim;
        }
    }

    /// Frames pushed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Mean of every pushed frame, `None` before the first push. SSIM is
    /// averaged over the frames that carried one.
    pub fn average(&self) -> Option<FrameQuality> {
        if self.frames == 0 {
            return None;
        }

        let n = self.frames as f64;
        Some(FrameQuality {
            psnr_y: self.psnr_y / n,
            psnr_u: self.psnr_u / n,
            psnr_v: self.psnr_v / n,
            psnr: self.psnr / n,
            ssim_y: (self.ssim_frames > 0).then(|| self.ssim_y / self.ssim_frames as f64),
        })
    }
}
