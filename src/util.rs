use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Derives a stable pair of unit-interval values from a key. Used to seed
/// bubble positions and shuffled palettes without carrying an RNG.
pub fn stable_unit_pair(key: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    (x.min(0.999_999), y.min(0.999_999))
}

pub fn format_streams(value: f64) -> String {
    let whole = value.max(0.0).round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
