const RADIUS_MIN: f32 = 2.0;
const RADIUS_MAX: f32 = 85.0;

/// Power-law mapping from a stream value to a bubble radius in pixels.
/// The exponent shifts visual emphasis between large and small values but
/// the endpoints stay pinned: 0 maps to 2 so zero-valued bubbles remain
/// visible, the domain maximum maps to 85 so nothing overflows the canvas.
#[derive(Clone, Copy, Debug)]
pub(super) struct RadiusScale {
    exponent: f32,
    domain_max: f64,
}

impl RadiusScale {
    pub(super) fn new(exponent: f32, domain_max: f64) -> Self {
        Self {
            exponent: exponent.max(f32::EPSILON),
            domain_max: if domain_max.is_finite() { domain_max } else { 0.0 },
        }
    }

    pub(super) fn radius(&self, value: f64) -> f32 {
        if self.domain_max <= 0.0 {
            return RADIUS_MIN;
        }

        let normalized = (value / self.domain_max).clamp(0.0, 1.0) as f32;
        RADIUS_MIN + ((RADIUS_MAX - RADIUS_MIN) * normalized.powf(self.exponent))
    }
}
