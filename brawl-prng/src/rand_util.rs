use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event occurs.
///
/// The event occurs with probability `numerator / denominator`. A numerator greater than or equal
/// to the denominator always succeeds.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random element from the given slice.
///
/// A slice with a single element does not advance the generator.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.len() <= 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}
