//! Aligning several independently detected cycles.
//!
//! When multiple simulations run in lockstep, the combined system repeats
//! with the least common multiple of the individual periods. These helpers
//! are for that composition step.

/// Greatest common divisor.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two periods.
///
/// `lcm(0, _)` is 0, matching the convention that a period-0 component
/// never constrains alignment.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of any number of periods; 1 for an empty input.
pub fn lcm_all<I>(periods: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    periods.into_iter().fold(1, lcm)
}
