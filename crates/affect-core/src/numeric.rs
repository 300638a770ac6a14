//! Numeric helpers shared by every analytics component.

/// Round `value` to `decimals` places, exact halves to even.
///
/// All user-visible scores pass through here so identical inputs produce
/// bit-identical outputs.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
