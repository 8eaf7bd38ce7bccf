use crate::Float;

/// Floor for the Rayleigh variance, keeps step zero finite.
pub const VARIANCE_EPSILON: Float = 1e-5;

/// Rayleigh distribution of the displacement radius,
///
/// $$ F(r) = 1 - e^{-r^2 / 2\sigma^2}, \qquad f(r) = \frac{r}{\sigma^2} e^{-r^2 / 2\sigma^2}. $$
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rayleigh {
    sigma_sq: Float,
}

impl Rayleigh {
    /// Distribution with variance parameter `sigma_sq`, floored at [`VARIANCE_EPSILON`].
    #[must_use]
    pub fn new(sigma_sq: Float) -> Self {
        Self {
            sigma_sq: sigma_sq.max(VARIANCE_EPSILON),
        }
    }

    /// Radius distribution after `step` ticks of a walk with mean free path $\lambda$,
    /// $\sigma^2 = \lambda^2 s$.
    #[must_use]
    pub fn after_steps(mean_free_path: Float, step: usize) -> Self {
        Self::new(mean_free_path * mean_free_path * step as Float)
    }

    #[must_use]
    pub fn sigma_sq(&self) -> Float {
        self.sigma_sq
    }

    /// The most likely radius, $\sigma$.
    #[must_use]
    pub fn mode(&self) -> Float {
        self.sigma_sq.sqrt()
    }

    /// $\sqrt{E[r^2]} = \sigma \sqrt{2}$.
    #[must_use]
    pub fn rms_radius(&self) -> Float {
        (2. * self.sigma_sq).sqrt()
    }

    #[inline]
    #[must_use]
    pub fn cdf(&self, r: Float) -> Float {
        1. - (-r * r / (2. * self.sigma_sq)).exp()
    }

    #[inline]
    #[must_use]
    pub fn pdf(&self, r: Float) -> Float {
        r / self.sigma_sq * (-r * r / (2. * self.sigma_sq)).exp()
    }
}
