use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, vec2};

use crate::chart::{CHART_HEIGHT, CHART_WIDTH, DisplayMode, region_label_anchors};
use crate::util::format_streams;

use super::ViewModel;

fn chart_to_screen(rect: Rect, scale: f32, chart_pos: egui::Vec2) -> Pos2 {
    let origin = rect.center() - vec2(CHART_WIDTH, CHART_HEIGHT) * (scale / 2.0);
    origin + chart_pos * scale
}

impl ViewModel {
    pub(super) fn draw_chart(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, Color32::from_rgb(250, 250, 248));

        // One integration step per frame; the renderer re-reads node
        // positions below, so the layout animates while alpha decays.
        let alpha = self.chart.tick();
        if self.chart.is_settling() {
            ui.ctx().request_repaint();
        }

        let scale = (rect.width() / CHART_WIDTH).min(rect.height() / CHART_HEIGHT);

        if self.chart.mode() == DisplayMode::Split {
            for (label, x, y) in region_label_anchors() {
                painter.text(
                    chart_to_screen(rect, scale, vec2(x, y)),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(15.0),
                    Color32::from_gray(60),
                );
            }
        }

        let pointer = ui.input(|input| input.pointer.hover_pos());
        let mut hovered = None;

        // Nodes are sorted descending by value, so iterating in order
        // draws the big bubbles first and keeps small ones on top. The
        // last hit under the pointer is therefore the topmost bubble.
        for (index, node) in self.chart.nodes().iter().enumerate() {
            let position = chart_to_screen(rect, scale, node.pos);
            let radius = node.radius * scale;
            let is_hovered = self.hovered == Some(index);

            painter.circle_filled(position, radius, self.chart.fill_color(node.year));
            let stroke_color = if is_hovered {
                Color32::from_gray(30)
            } else {
                self.chart.stroke_color(node.year)
            };
            painter.circle_stroke(position, radius, Stroke::new(2.0, stroke_color));

            if let Some(pointer) = pointer
                && pointer.distance(position) <= radius
            {
                hovered = Some(index);
            }
        }

        self.hovered = hovered;

        if self.chart.is_settling() {
            painter.text(
                rect.left_bottom() + vec2(10.0, -10.0),
                Align2::LEFT_BOTTOM,
                format!("settling (alpha {alpha:.3})"),
                FontId::proportional(11.0),
                Color32::from_gray(140),
            );
        }

        if let Some(node) = self.hovered.and_then(|index| self.chart.nodes().get(index)) {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
            response.on_hover_ui(|ui| {
                ui.strong(&node.name);
                ui.label(format!("Artist: {}", node.artist));
                ui.label(format!("Date published: {}", node.year));
                ui.label(format!("Rank: {}", node.rank));
                ui.label(format!("Streams: {}", format_streams(node.value)));
            });
        }
    }
}
