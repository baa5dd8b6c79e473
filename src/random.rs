use rand::Rng;

/// Draws an integer uniformly from the inclusive range `[lower, upper]`.
///
/// A uniform `u` in `[0, 1)` is mapped as `floor(u * (upper - lower + 1)) + lower`,
/// so both endpoints get the same probability mass as every other integer.
/// Expects `lower <= upper`.
pub fn random_target<R: Rng + ?Sized>(lower: i32, upper: i32, rng: &mut R) -> i32 {
    debug_assert!(lower <= upper);
    let span = upper as i64 - lower as i64 + 1;
    let u: f64 = rng.random();
    let offset = (u * span as f64).floor() as i64;
    (lower as i64 + offset.min(span - 1)) as i32
}
