use std::f64::consts::PI;

use crate::error::DataError;

/// The constants shaping the two spirals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    /// The last point index, each spiral has `points + 1` samples.
    pub points: usize,
    /// The angle advances by `PI / divisor` per point.
    pub divisor: f64,
    /// The radius of the first point.
    pub max_radius: f64,
    /// The radius shrinks linearly, reaching zero at index `decay`.
    pub decay: f64,
}

impl Default for SpiralConfig {
    /// The canonical two-spirals benchmark: 97 points per spiral.
    fn default() -> Self {
        Self {
            points: 96,
            divisor: 16.0,
            max_radius: 6.5,
            decay: 104.0,
        }
    }
}

/// A single labeled 2-D sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: f64,
}

impl LabeledPoint {
    /// Returns the coordinates as the single-precision input pair the programs consume.
    #[inline]
    pub fn features(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// Two interleaved, mirrored spirals.
///
/// Samples are ordered spiral-then-mirror per point: flat index `2 * i` is the point of
/// the first spiral (label `1.0`) and `2 * i + 1` its reflection through the origin
/// (label `0.0`).
#[derive(Debug, Clone, Default)]
pub struct Spiral {
    config: SpiralConfig,
}

impl Spiral {
    pub fn new(config: SpiralConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Returns the total amount of samples, both spirals included.
    #[inline]
    pub fn len(&self) -> usize {
        2 * (self.config.points + 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Generates the `i`-th point of the spiral along with its mirrored sample.
    ///
    /// # Errors
    /// Returns `DataError::OutOfBounds` if `i` is past the last point.
    pub fn pair(&self, i: usize) -> Result<[LabeledPoint; 2], DataError> {
        let SpiralConfig {
            points,
            divisor,
            max_radius,
            decay,
        } = self.config;

        if i > points {
            return Err(DataError::OutOfBounds {
                index: i,
                len: points + 1,
            });
        }

        let angle = i as f64 * PI / divisor;
        let radius = max_radius * (decay - i as f64) / decay;
        let x = radius * angle.sin();
        let y = radius * angle.cos();

        Ok([
            LabeledPoint { x, y, label: 1.0 },
            LabeledPoint {
                x: -x,
                y: -y,
                label: 0.0,
            },
        ])
    }

    /// Fetches a sample by its flat index.
    ///
    /// # Errors
    /// Returns `DataError::OutOfBounds` if `index` is invalid.
    pub fn get(&self, index: usize) -> Result<LabeledPoint, DataError> {
        let len = self.len();
        let pair = self
            .pair(index / 2)
            .map_err(|_| DataError::OutOfBounds { index, len })?;

        Ok(pair[index % 2])
    }

    /// Iterates every sample in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = LabeledPoint> + '_ {
        (0..=self.config.points)
            .filter_map(|i| self.pair(i).ok())
            .flatten()
    }
}

/// Generates the `i`-th point pair of the canonical spiral.
pub fn generate(i: usize) -> Result<[LabeledPoint; 2], DataError> {
    Spiral::default().pair(i)
}
