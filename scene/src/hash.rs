//! Stable string hash used to seed per-node color and wobble.
//!
//! FNV-1a over the string's characters with explicit 32-bit wraparound. The
//! exact bits matter: colors and wobble are derived from the result, so the
//! same path must render identically on every run and every platform.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

const FNV1A_OFFSET: u32 = 2_166_136_261;
const FNV1A_PRIME: u32 = 16_777_619;

/// Hash `s` to a non-negative 32-bit integer.
#[must_use]
pub fn hash_string_to_int(s: &str) -> u32 {
    let mut hash = FNV1A_OFFSET;
    for c in s.chars() {
        hash ^= u32::from(c);
        hash = hash.wrapping_mul(FNV1A_PRIME);
    }
    hash
}
