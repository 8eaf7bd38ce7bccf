//! Empirical radius distributions compared against the Rayleigh distribution.
//!
//! Every call to [`compute_histogram`] builds a fresh [`HistogramSample`] from the
//! current particle positions. Nothing is cached between calls, so the same
//! positions always give the same sample.

mod rayleigh;

pub use rayleigh::*;

use nalgebra::Vector2;

use crate::{
    config::{PATH_OVERLAY_BIN_COUNT, PLOT_BIN_COUNT},
    Float,
};

/// Floor for the histogram range, keeps the bin width positive.
pub const RADIUS_EPSILON: Float = 1e-5;

/// Which distribution a histogram shows and how its range is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistogramMode {
    /// Cumulative fraction over `[0, largest observed radius]`.
    Cdf,
    /// Density over `[0, largest observed radius]`, with peak detection.
    Pdf,
    /// Cumulative fraction over `[0, λ·sqrt(2s)]`, drawn over the particle paths.
    PathOverlay,
}

impl HistogramMode {
    #[must_use]
    pub fn default_bin_count(&self) -> usize {
        match self {
            HistogramMode::Cdf | HistogramMode::Pdf => PLOT_BIN_COUNT,
            HistogramMode::PathOverlay => PATH_OVERLAY_BIN_COUNT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistogramBin {
    /// Bin edge.
    pub radius: Float,
    pub empirical: Float,
    pub theoretical: Float,
}

/// Scalar statistics of the radius distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadiusSummary {
    /// $R = \lambda \sqrt{2s}$.
    pub theoretical_rms: Float,
    pub theoretical_cdf_at_rms: Float,
    pub theoretical_pdf_at_rms: Float,
    /// $R' = \sqrt{\langle r^2 \rangle}$ over all particles.
    pub empirical_rms: Float,
    /// First bin with an edge at or beyond $R'$, the last bin if there is none.
    pub empirical_rms_bin: usize,
    /// Empirical CDF at `empirical_rms_bin`.
    pub empirical_cdf_at_rms: Float,
    /// $2 \lambda \sqrt{s}$, radius of the guide circle around the particle cloud.
    pub spread_radius: Float,
}

/// Radii of the largest theoretical and empirical density bins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Peaks {
    pub theoretical: Float,
    pub empirical: Float,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramSample {
    pub mode: HistogramMode,
    pub max_radius: Float,
    /// One entry per bin with strictly increasing radius.
    pub bins: Vec<HistogramBin>,
    pub summary: RadiusSummary,
    /// Only set in [`HistogramMode::Pdf`].
    pub peaks: Option<Peaks>,
}

impl HistogramSample {
    fn empty(mode: HistogramMode) -> Self {
        Self {
            mode,
            max_radius: RADIUS_EPSILON,
            bins: Vec::new(),
            summary: RadiusSummary::default(),
            peaks: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn radii(&self) -> impl Iterator<Item = Float> + '_ {
        self.bins.iter().map(|bin| bin.radius)
    }

    pub fn empirical(&self) -> impl Iterator<Item = Float> + '_ {
        self.bins.iter().map(|bin| bin.empirical)
    }

    pub fn theoretical(&self) -> impl Iterator<Item = Float> + '_ {
        self.bins.iter().map(|bin| bin.theoretical)
    }
}

/// Equally spaced bin edges on `[0, max_radius]`.
#[derive(Clone, Copy, Debug)]
struct BinEdges {
    max_radius: Float,
    intervals: usize,
}

impl BinEdges {
    fn new(max_radius: Float, bin_count: usize) -> Self {
        Self {
            max_radius,
            intervals: bin_count.saturating_sub(1).max(1),
        }
    }

    fn width(&self) -> Float {
        self.max_radius / self.intervals as Float
    }

    /// The last edge is exactly `max_radius`.
    fn edge(&self, k: usize) -> Float {
        self.max_radius * (k as Float / self.intervals as Float)
    }
}

/// Sorted distances from the origin.
fn sorted_radii<'a>(positions: impl IntoIterator<Item = &'a Vector2<Float>>) -> Vec<Float> {
    let mut radii: Vec<Float> = positions.into_iter().map(|p| p.norm()).collect();
    radii.sort_by(Float::total_cmp);
    radii
}

/// Number of radii at or below each edge, with a single forward pass.
fn cumulative_counts(radii: &[Float], edges: &BinEdges, bin_count: usize) -> Vec<usize> {
    let mut counts = Vec::with_capacity(bin_count);
    let mut count = 0;
    for k in 0..bin_count {
        let edge = edges.edge(k);
        while count < radii.len() && radii[count] <= edge {
            count += 1;
        }
        counts.push(count);
    }
    counts
}

/// Index of the largest value, the first one on ties.
fn argmax(values: impl Iterator<Item = Float>) -> usize {
    let mut best = (0, Float::NEG_INFINITY);
    for (i, value) in values.enumerate() {
        if value > best.1 {
            best = (i, value);
        }
    }
    best.0
}

/// Build the histogram of particle distances from the origin after `current_step`
/// ticks, next to the Rayleigh distribution with $\sigma^2 = \lambda^2 s$.
///
/// Without particles, or with `bin_count == 0`, the sample has no bins.
/// At step zero every value is zero.
pub fn compute_histogram<'a>(
    positions: impl IntoIterator<Item = &'a Vector2<Float>>,
    mean_free_path: Float,
    current_step: usize,
    bin_count: usize,
    mode: HistogramMode,
) -> HistogramSample {
    let radii = sorted_radii(positions);
    let n = radii.len();
    if n == 0 || bin_count == 0 {
        return HistogramSample::empty(mode);
    }

    let rayleigh = Rayleigh::after_steps(mean_free_path, current_step);
    let theoretical_rms = if current_step == 0 {
        0.
    } else {
        rayleigh.rms_radius()
    };
    let max_radius = match mode {
        HistogramMode::Cdf | HistogramMode::Pdf => radii[n - 1],
        HistogramMode::PathOverlay => theoretical_rms,
    }
    .max(RADIUS_EPSILON);
    let edges = BinEdges::new(max_radius, bin_count);

    if current_step == 0 {
        let bins = (0..bin_count)
            .map(|k| HistogramBin {
                radius: edges.edge(k),
                ..Default::default()
            })
            .collect();

        return HistogramSample {
            mode,
            max_radius,
            bins,
            summary: RadiusSummary::default(),
            peaks: (mode == HistogramMode::Pdf).then(Peaks::default),
        };
    }

    let counts = cumulative_counts(&radii, &edges, bin_count);
    let n_float = n as Float;
    let width = edges.width();

    let bins: Vec<HistogramBin> = counts
        .iter()
        .enumerate()
        .map(|(k, &count)| {
            let radius = edges.edge(k);
            let (empirical, theoretical) = match mode {
                HistogramMode::Cdf | HistogramMode::PathOverlay => {
                    (count as Float / n_float, rayleigh.cdf(radius))
                }
                HistogramMode::Pdf => {
                    let previous = if k > 0 { counts[k - 1] } else { 0 };
                    (
                        (count - previous) as Float / (width * n_float),
                        rayleigh.pdf(radius),
                    )
                }
            };

            HistogramBin {
                radius,
                empirical,
                theoretical,
            }
        })
        .collect();

    let empirical_rms = (radii.iter().map(|r| r * r).sum::<Float>() / n_float).sqrt();
    let empirical_rms_bin = (0..bin_count)
        .find(|&k| edges.edge(k) >= empirical_rms)
        .unwrap_or(bin_count - 1);

    let summary = RadiusSummary {
        theoretical_rms,
        theoretical_cdf_at_rms: rayleigh.cdf(theoretical_rms),
        theoretical_pdf_at_rms: rayleigh.pdf(theoretical_rms),
        empirical_rms,
        empirical_rms_bin,
        empirical_cdf_at_rms: counts[empirical_rms_bin] as Float / n_float,
        spread_radius: 2. * mean_free_path * (current_step as Float).sqrt(),
    };

    let peaks = (mode == HistogramMode::Pdf).then(|| Peaks {
        theoretical: bins[argmax(bins.iter().map(|bin| bin.theoretical))].radius,
        empirical: bins[argmax(bins.iter().map(|bin| bin.empirical))].radius,
    });

    HistogramSample {
        mode,
        max_radius,
        bins,
        summary,
        peaks,
    }
}
