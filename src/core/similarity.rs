//! Vector similarity math
//!
//! Cosine similarity is `1 - cosine_distance`. Angular similarity maps the angle
//! between two vectors onto [0, 1], which keeps averages over several pairs linear
//! in angle rather than in cosine.

use std::f64::consts::PI;

/// Cosine similarity between two vectors
///
/// Accumulates in `f64`. A zero vector has no direction, so its similarity to
/// anything is 0.0.
///
/// # Examples
/// ```
/// use codenames_solver::core::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]);
/// assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a dimension");

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Angular similarity for a given cosine similarity
///
/// `1 - arccos(cos) / π`: 1.0 for identical directions, 0.5 for orthogonal,
/// 0.0 for opposite.
#[inline]
#[must_use]
pub fn angular_similarity(cosine: f64) -> f64 {
    1.0 - cosine.clamp(-1.0, 1.0).acos() / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_identical_vectors() {
        let sim = cosine_similarity(&[0.3, -1.2, 4.0], &[0.3, -1.2, 4.0]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_is_scale_invariant() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_orthogonal_and_opposite() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_zero_vector() {
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn angular_bounds() {
        assert!((angular_similarity(1.0) - 1.0).abs() < 1e-9);
        assert!((angular_similarity(0.0) - 0.5).abs() < 1e-9);
        assert!(angular_similarity(-1.0).abs() < 1e-9);
    }

    #[test]
    fn angular_is_monotonic() {
        assert!(angular_similarity(0.8) > angular_similarity(0.5));
        assert!(angular_similarity(0.5) > angular_similarity(-0.2));
    }

    #[test]
    fn angular_clamps_rounding_overshoot() {
        assert!(angular_similarity(1.000_000_1).is_finite());
    }
}
