/// Random number generator (xorshift32). Only used for degenerate-geometry
/// recovery, so quality matters less than determinism under a seeded state.
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform-ish heading in [0, 360).
pub(crate) fn random_heading(state: &mut u32) -> f32 {
    (xorshift32(state) % 360) as f32
}
