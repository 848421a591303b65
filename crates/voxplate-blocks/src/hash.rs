/// The classic 31-multiplier string hash over UTF-16 code units, truncated to
/// a signed 32-bit integer on every step.
///
/// Only used to derive a repeatable fallback color for a material key when no
/// texture atlas is configured; not a general hashing facility.
pub fn java_string_hash(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash
}
