use eframe::egui::{Vec2, vec2};

use crate::data::{Record, Region};
use crate::util::stable_unit_pair;

use super::scale::RadiusScale;

// Seed positions only; the simulation owns every position after the first
// tick. The bounds match the original chart's scatter area.
const SEED_SPAN_X: f32 = 900.0;
const SEED_SPAN_Y: f32 = 800.0;

/// One bubble: the derived visual entity the simulation moves around.
#[derive(Clone, Debug)]
pub struct Node {
    pub rank: u32,
    pub radius: f32,
    /// Scaled metric: streams in millions times 10^6.
    pub value: f64,
    pub name: String,
    pub artist: String,
    pub region: Region,
    /// Category key for the color map.
    pub year: i32,
    pub pos: Vec2,
    pub velocity: Vec2,
}

pub(super) fn scaled_value(record: &Record) -> f64 {
    record.streams * 1.0e6
}

pub(super) fn max_value(records: &[Record]) -> f64 {
    records
        .iter()
        .map(scaled_value)
        .fold(0.0_f64, |max, value| max.max(value))
}

fn seed_position(record: &Record) -> Vec2 {
    let (jx, jy) = stable_unit_pair(&format!("{}-{}", record.title, record.rank));
    vec2(jx * SEED_SPAN_X, jy * SEED_SPAN_Y)
}

/// Builds the node collection for a dataset: scaled values, power-law
/// radii, hash-seeded positions, sorted descending by value so larger
/// bubbles draw first and cannot fully occlude smaller neighbours.
pub(super) fn build_nodes(records: &[Record], exponent: f32) -> Vec<Node> {
    let scale = RadiusScale::new(exponent, max_value(records));

    let mut nodes = records
        .iter()
        .map(|record| {
            let value = scaled_value(record);
            Node {
                rank: record.rank,
                radius: scale.radius(value),
                value,
                name: record.title.clone(),
                artist: record.artist.clone(),
                region: record.region,
                year: record.year,
                pos: seed_position(record),
                velocity: Vec2::ZERO,
            }
        })
        .collect::<Vec<_>>();

    nodes.sort_by(|a, b| b.value.total_cmp(&a.value));
    nodes
}
