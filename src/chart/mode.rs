use crate::data::Region;

use super::CHART_WIDTH;

/// The two display states of the chart. Grouped pulls every bubble toward
/// one shared center; Split pulls each bubble toward its region column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Grouped,
    Split,
}

/// The attribute a split layout is keyed on. Only artist origin exists
/// today; the facade takes `Option<SplitCriterion>` so the toggle surface
/// does not change when more criteria appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitCriterion {
    Region,
}

const REGION_LABEL_Y: f32 = 40.0;

/// Horizontal pull target per region in split mode. Total over `Region`,
/// so an out-of-vocabulary origin (already normalized to `Other`) always
/// has a defined target.
pub(super) fn region_center_x(region: Region) -> f32 {
    match region {
        Region::European => CHART_WIDTH / 3.0,
        Region::American => CHART_WIDTH / 2.0,
        Region::AfricanCaribbean => 2.0 * CHART_WIDTH / 3.0,
        Region::Other => CHART_WIDTH * 0.8,
    }
}

fn region_label_x(region: Region) -> f32 {
    match region {
        Region::European => CHART_WIDTH / 4.0,
        Region::American => CHART_WIDTH / 2.0,
        Region::AfricanCaribbean => CHART_WIDTH * 0.75,
        Region::Other => CHART_WIDTH * 0.95,
    }
}

/// Label text and chart-space anchor for each region column, drawn by the
/// host while the chart is in split mode.
pub fn region_label_anchors() -> [(&'static str, f32, f32); 4] {
    Region::ALL.map(|region| (region.label(), region_label_x(region), REGION_LABEL_Y))
}
