//! Segment light discretized into point samples.

use penumbra_math::DVec3;

/// A line-segment light source.
///
/// The segment is replaced by `sample_count` point lights at `left + (right -
/// left) * i / sample_count`, each carrying an equal share of the total
/// intensity. The first sample sits at `left`; `right` itself is never
/// sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    left: DVec3,
    right: DVec3,
    total_intensity: f64,
    samples: Vec<DVec3>,
}

impl AreaLight {
    /// Create a new segment light.
    ///
    /// A `sample_count` of 0 is raised to 1.
    pub fn new(left: DVec3, right: DVec3, total_intensity: f64, sample_count: usize) -> Self {
        let sample_count = sample_count.max(1);
        let step = 1.0 / sample_count as f64;

        let samples = (0..sample_count)
            .map(|i| left.lerp(right, i as f64 * step))
            .collect();

        Self {
            left,
            right,
            total_intensity,
            samples,
        }
    }

    /// A light with a single sample at `position`.
    pub fn point(position: DVec3, intensity: f64) -> Self {
        Self::new(position, position, intensity, 1)
    }

    pub fn left(&self) -> DVec3 {
        self.left
    }

    pub fn right(&self) -> DVec3 {
        self.right
    }

    pub fn total_intensity(&self) -> f64 {
        self.total_intensity
    }

    /// The discretized sample positions, ordered from `left` to `right`.
    pub fn samples(&self) -> &[DVec3] {
        &self.samples
    }

    /// Intensity carried by each sample.
    pub fn sample_intensity(&self) -> f64 {
        self.total_intensity / self.samples.len() as f64
    }
}
