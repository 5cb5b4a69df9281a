//! Uniform one-dimensional position grid over `[-x, x]`.

use nalgebra::DVector;
use crate::error::QhoError;

/// Largest number of points a grid may hold.
pub const MAX_GRID_POINTS: usize = 1 << 26;

/// Ordered, evenly spaced sample positions `r[i] = -x + i*dx`.
///
/// The number of points is `floor(2x/dx) + 1`, so the last point only equals
/// `x` when `2x` is an integer multiple of `dx`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    points: DVector<f64>,
    spacing: f64,
}

impl Grid {
    /// Build the grid for half-range `x` and spacing `dx`.
    ///
    /// Fails with [`QhoError::InvalidConfiguration`] when either value is not
    /// positive and finite, when `dx > 2x` leaves no interval to sample, or
    /// when the grid would exceed [`MAX_GRID_POINTS`].
    pub fn new(x: f64, dx: f64) -> Result<Self, QhoError> {
        QhoError::check_positive("x", x)?;
        QhoError::check_positive("dx", dx)?;
        if dx > 2.0 * x {
            return Err(QhoError::InvalidConfiguration(format!(
                "dx must not exceed the full range 2x = {}; got {dx}", 2.0 * x
            )));
        }

        let intervals = ((x * 2.0) / dx).floor();
        let n_points = (intervals.is_finite() && intervals < MAX_GRID_POINTS as f64)
            .then(|| (intervals as usize).checked_add(1))
            .flatten()
            .ok_or_else(|| QhoError::InvalidConfiguration(format!(
                "grid for x = {x}, dx = {dx} would exceed {MAX_GRID_POINTS} points"
            )))?;
        let points = DVector::from_fn(n_points, |i, _| -x + dx * i as f64);
        Ok(Self { points, spacing: dx })
    }

    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn first(&self) -> f64 {
        self.points[0]
    }

    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid() {
        let grid = Grid::new(6.0, 0.1).unwrap();
        assert_eq!(grid.len(), 121);
        assert_relative_eq!(grid.first(), -6.0);
        assert_relative_eq!(grid.last(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(grid.points()[60], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_points_are_multiplied_not_accumulated() {
        let grid = Grid::new(2.5, 0.3).unwrap();
        assert_eq!(grid.len(), 17);
        for (i, &r) in grid.iter().enumerate() {
            assert_eq!(r, -2.5 + 0.3 * i as f64);
        }
        // floor(5.0 / 0.3) = 16, so the grid stops short of x
        assert!(grid.last() < 2.5);
    }

    #[test]
    fn test_smallest_valid_grid() {
        // floor(0.1 / 0.1) + 1 = 2 points starting at -x; a one-point [0.0] grid needs x = 0
        let grid = Grid::new(0.05, 0.1).unwrap();
        assert_eq!(grid.len(), 2);
        assert_relative_eq!(grid.first(), -0.05);
        assert_relative_eq!(grid.last(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_zero_spacing() {
        let err = Grid::new(1.0, 0.0).unwrap_err();
        assert!(matches!(err, QhoError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(matches!(Grid::new(1e308, 1.0), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(1.0, 1e-300), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(1e6, 1e-3), Err(QhoError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        assert!(matches!(Grid::new(0.0, 0.1), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(-1.0, 0.1), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(1.0, -0.1), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(1.0, 2.5), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(f64::NAN, 0.1), Err(QhoError::InvalidConfiguration(_))));
        assert!(matches!(Grid::new(1.0, f64::INFINITY), Err(QhoError::InvalidConfiguration(_))));
    }
}
