mod conic;

pub use conic::{sample_ellipse, sample_hyperbola, sample_parabola};

/// Parameters controlling boundary sampling density.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Parametric samples around a closed conic (circle, ellipse).
    pub closed_samples: u32,
    /// Lower clamp for viewport-proportional scans (parabola, hyperbola).
    pub min_scan_samples: u32,
    /// Upper clamp for viewport-proportional scans.
    pub max_scan_samples: u32,
    /// Scan samples per world unit of the scanned viewport span.
    pub samples_per_unit: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            closed_samples: 256,
            min_scan_samples: 180,
            max_scan_samples: 420,
            samples_per_unit: 24.0,
        }
    }
}

impl SamplingParams {
    /// Number of scan samples for a viewport span, proportional to the span
    /// and clamped to the configured band.
    #[must_use]
    pub fn scan_samples(&self, span: f64) -> u32 {
        let raw = (span * self.samples_per_unit).ceil();
        if !raw.is_finite() || raw <= 0.0 {
            return self.min_scan_samples;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = raw.min(f64::from(u32::MAX)) as u32;
        n.clamp(self.min_scan_samples, self.max_scan_samples)
    }
}
