//! Three-point finite-difference kinetic operator with zero boundaries.

use nalgebra::DVector;

/// Return `[0, s..., 0]` without touching `s`.
pub fn add_zero_boundary(s: &DVector<f64>) -> DVector<f64> {
    let n = s.len();
    DVector::from_fn(n + 2, |i, _| if i == 0 || i == n + 1 { 0.0 } else { s[i - 1] })
}

/// Return `s` without its first and last entries. Inputs shorter than two
/// samples give an empty vector.
pub fn delete_zero_boundary(s: &DVector<f64>) -> DVector<f64> {
    if s.len() < 2 {
        return DVector::zeros(0);
    }
    s.rows(1, s.len() - 2).into_owned()
}

/// Kinetic samples `k[i] = (2φ[i] - φ[i+1] - φ[i-1]) / (2dx²)`, i.e. -½φ''.
///
/// The virtual neighbours outside the grid are zero, so the two edge samples
/// carry the boundary artifact of a hard wall.
pub fn kinetic_field(phi: &DVector<f64>, dx: f64) -> DVector<f64> {
    let padded = add_zero_boundary(phi);
    let scale = 2.0 * dx * dx;
    DVector::from_fn(phi.len(), |i, _| {
        (2.0 * padded[i + 1] - padded[i + 2] - padded[i]) / scale
    })
}
