use eframe::egui::Color32;

use crate::data::Record;

use super::chart_center;
use super::color::{CategoryColorMap, stroke_color};
use super::mode::{DisplayMode, SplitCriterion};
use super::node::{Node, build_nodes, max_value};
use super::physics::{Simulation, XTarget};
use super::scale::RadiusScale;

/// Owns the dataset, the derived node collection (via the simulation),
/// the color map, and the display-mode state. All mutation goes through
/// named operations; every derived piece is recomputed, never patched
/// from outside.
pub struct BubbleChart {
    records: Vec<Record>,
    palette: Vec<Color32>,
    radial_exponent: f32,
    colors: CategoryColorMap,
    simulation: Simulation,
    mode: DisplayMode,
}

const DEFAULT_RADIAL_EXPONENT: f32 = 2.0;

impl BubbleChart {
    pub fn new(records: Vec<Record>, palette: Vec<Color32>) -> Self {
        let radial_exponent = DEFAULT_RADIAL_EXPONENT;
        let colors = CategoryColorMap::new(&category_domain(&records), &palette);
        let simulation = Simulation::new(build_nodes(&records, radial_exponent));

        let mut chart = Self {
            records,
            palette,
            radial_exponent,
            colors,
            simulation,
            mode: DisplayMode::Grouped,
        };
        chart.apply_grouped();
        chart
    }

    /// Replaces the dataset: rebuilds nodes, category domain, color map,
    /// and a fresh simulation. A dataset swap always lands back in
    /// Grouped mode, whatever mode was active before.
    pub fn set_dataset(&mut self, records: Vec<Record>) {
        self.simulation.stop();
        self.records = records;
        self.colors = CategoryColorMap::new(&category_domain(&self.records), &self.palette);
        self.simulation = Simulation::new(build_nodes(&self.records, self.radial_exponent));
        self.apply_grouped();
    }

    /// Swaps the palette and recolors the current categories. Positions
    /// and the simulation are untouched.
    pub fn set_colors(&mut self, palette: Vec<Color32>) {
        self.palette = palette;
        self.colors = CategoryColorMap::new(&category_domain(&self.records), &self.palette);
    }

    /// Rebuilds the radius scale and every node radius in place. The
    /// charge force depends on radius, so the simulation is re-energized
    /// to settle the new sizes; node identity and order are preserved.
    pub fn set_radial_exponent(&mut self, exponent: f32) {
        self.radial_exponent = exponent;
        let scale = RadiusScale::new(exponent, max_value(&self.records));
        for node in self.simulation.nodes_mut() {
            node.radius = scale.radius(node.value);
        }
        self.simulation.restart(1.0);
    }

    /// Switches the display mode: `Some(criterion)` splits the bubbles by
    /// that attribute, `None` regroups them around the shared center.
    /// Re-entering the active mode reconfigures and restarts identically.
    pub fn toggle_mode(&mut self, criterion: Option<SplitCriterion>) {
        match criterion {
            Some(SplitCriterion::Region) => {
                self.mode = DisplayMode::Split;
                self.simulation.set_x_target(XTarget::RegionCenters);
                self.simulation.restart(1.0);
            }
            None => self.apply_grouped(),
        }
    }

    fn apply_grouped(&mut self) {
        self.mode = DisplayMode::Grouped;
        self.simulation
            .set_x_target(XTarget::Center(chart_center().x));
        self.simulation.restart(1.0);
    }

    /// One simulation step; returns the remaining alpha.
    pub fn tick(&mut self) -> f32 {
        self.simulation.tick()
    }

    pub fn is_settling(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn nodes(&self) -> &[Node] {
        self.simulation.nodes()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn radial_exponent(&self) -> f32 {
        self.radial_exponent
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn fill_color(&self, year: i32) -> Color32 {
        self.colors.color(year)
    }

    pub fn stroke_color(&self, year: i32) -> Color32 {
        stroke_color(self.colors.color(year))
    }

    #[cfg(test)]
    pub(super) fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

/// Distinct category keys (publish years) in the dataset, in sorted
/// order so palette assignment is deterministic for one dataset.
fn category_domain(records: &[Record]) -> Vec<i32> {
    let mut domain = records.iter().map(|record| record.year).collect::<Vec<_>>();
    domain.sort_unstable();
    domain.dedup();
    domain
}
