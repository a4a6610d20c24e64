/// Radix of a single limb.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one full limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// Largest magnitude served from the small value cache.
pub const MAX_CONSTANT: usize = 16;

pub const POW10: [u32; DIGITS_PER_LIMB + 1] = [
    1, 10, 100, 1_000, 10_000, 100_000,
    1_000_000, 10_000_000, 100_000_000, 1_000_000_000,
];
