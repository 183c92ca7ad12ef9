/// Returns no roots for a negative discriminant, one root when it is exactly
/// zero, and otherwise `[(-b + √Δ) / 2a, (-b - √Δ) / 2a]` in that order. The
/// roots are not sorted.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    if discriminant == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    let sqrt_disc = discriminant.sqrt();
    vec![(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)]
}

/// Smallest root satisfying `accept`, i.e. the earliest physical event when
/// the roots are times.
pub fn smallest_root_where(roots: &[f64], accept: impl Fn(f64) -> bool) -> Option<f64> {
    roots
        .iter()
        .copied()
        .filter(|root| accept(*root))
        .min_by(f64::total_cmp)
}
