use std::collections::HashMap;

use eframe::egui::Color32;

use crate::util::stable_unit_pair;

/// Fill colors keyed by publish year. The domain is the set of distinct
/// years in the active dataset; when it outgrows the palette, assignment
/// cycles through the palette again.
pub struct CategoryColorMap {
    assignments: HashMap<i32, Color32>,
    fallback: Color32,
}

impl CategoryColorMap {
    pub fn new(domain: &[i32], palette: &[Color32]) -> Self {
        let palette = if palette.is_empty() {
            &[Color32::GRAY][..]
        } else {
            palette
        };

        let mut assignments = HashMap::with_capacity(domain.len());
        for (index, &key) in domain.iter().enumerate() {
            assignments.insert(key, palette[index % palette.len()]);
        }

        Self {
            assignments,
            fallback: palette[0],
        }
    }

    /// Never fails: keys outside the construction-time domain get the
    /// fallback bucket instead of an error.
    pub fn color(&self, key: i32) -> Color32 {
        self.assignments.get(&key).copied().unwrap_or(self.fallback)
    }
}

/// Darkened variant of the fill used for bubble outlines.
pub fn stroke_color(fill: Color32) -> Color32 {
    Color32::from_rgb(
        (fill.r() as f32 * 0.7) as u8,
        (fill.g() as f32 * 0.7) as u8,
        (fill.b() as f32 * 0.7) as u8,
    )
}

/// The reference palette, in its original order.
pub fn default_palette() -> Vec<Color32> {
    vec![
        Color32::from_rgb(0xff, 0x00, 0x00),
        Color32::from_rgb(0xff, 0xa5, 0x00),
        Color32::from_rgb(0xff, 0xcd, 0x00),
        Color32::from_rgb(0x87, 0xc7, 0x35),
        Color32::from_rgb(0x3e, 0x49, 0xbb),
        Color32::from_rgb(0x68, 0x2c, 0xbf),
        Color32::from_rgb(0x7f, 0x4f, 0xc9),
        Color32::from_rgb(0xff, 0xc0, 0xcb),
        Color32::from_rgb(0xa5, 0x2a, 0x2a),
    ]
}

/// Hash-derived eight-color palette for the "shuffle colors" action.
/// Deterministic per seed, different across seeds.
pub fn shuffled_palette(seed: u64) -> Vec<Color32> {
    (0..8u64)
        .map(|slot| {
            let (a, b) = stable_unit_pair(&format!("palette-{seed}-{slot}"));
            let (c, _) = stable_unit_pair(&format!("palette-{seed}-{slot}-mix"));
            Color32::from_rgb(
                32 + (a * 208.0) as u8,
                32 + (b * 208.0) as u8,
                32 + (c * 208.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_key_gets_a_palette_color() {
        let palette = default_palette();
        let domain = [2017, 2018, 2019];
        let colors = CategoryColorMap::new(&domain, &palette);

        for key in domain {
            assert!(palette.contains(&colors.color(key)));
        }
    }

    #[test]
    fn lookups_are_deterministic_within_one_assignment() {
        let colors = CategoryColorMap::new(&[2017, 2018, 2019], &default_palette());
        for key in [2017, 2018, 2019] {
            assert_eq!(colors.color(key), colors.color(key));
        }
    }

    #[test]
    fn oversized_domains_cycle_the_palette() {
        let palette = [Color32::RED, Color32::GREEN];
        let domain = [2015, 2016, 2017, 2018, 2019];
        let colors = CategoryColorMap::new(&domain, &palette);

        assert_eq!(colors.color(2015), Color32::RED);
        assert_eq!(colors.color(2016), Color32::GREEN);
        assert_eq!(colors.color(2017), Color32::RED);
        assert_eq!(colors.color(2019), Color32::RED);
    }

    #[test]
    fn unknown_keys_fall_back_instead_of_failing() {
        let colors = CategoryColorMap::new(&[2019], &[Color32::RED, Color32::GREEN]);
        assert_eq!(colors.color(1999), Color32::RED);
    }

    #[test]
    fn empty_palette_still_produces_a_color() {
        let colors = CategoryColorMap::new(&[2019], &[]);
        assert_eq!(colors.color(2019), Color32::GRAY);
    }

    #[test]
    fn shuffled_palettes_are_stable_per_seed() {
        assert_eq!(shuffled_palette(7), shuffled_palette(7));
        assert_ne!(shuffled_palette(7), shuffled_palette(8));
        assert_eq!(shuffled_palette(7).len(), 8);
    }

    #[test]
    fn stroke_is_darker_than_fill() {
        let fill = Color32::from_rgb(200, 150, 100);
        let stroke = stroke_color(fill);
        assert!(stroke.r() < fill.r());
        assert!(stroke.g() < fill.g());
        assert!(stroke.b() < fill.b());
    }
}
