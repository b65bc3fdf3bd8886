mod bubble;
mod color;
mod mode;
mod node;
mod physics;
mod scale;

use eframe::egui::{Vec2, vec2};

pub use bubble::BubbleChart;
pub use color::{default_palette, shuffled_palette};
pub use mode::{DisplayMode, SplitCriterion, region_label_anchors};
pub use node::Node;

/// Chart-space geometry shared by the layout engine and the host renderer.
/// Matches the original 940x600 canvas the force targets were tuned for.
pub const CHART_WIDTH: f32 = 940.0;
pub const CHART_HEIGHT: f32 = 600.0;

pub fn chart_center() -> Vec2 {
    vec2(CHART_WIDTH / 2.0, CHART_HEIGHT / 2.0)
}
