use eframe::egui::{self, Align, Context, Layout, Slider, Ui};

use crate::chart::{DisplayMode, SplitCriterion, shuffled_palette};

use super::{DATASET_YEARS, ViewModel};

impl ViewModel {
    pub(super) fn show(&mut self, ctx: &Context, is_reloading: bool) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("stream-bubbles");
                    ui.separator();
                    ui.label(format!("year: {}", DATASET_YEARS[self.selected_year]));
                    ui.label(format!("songs: {}", self.chart.record_count()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if is_reloading {
                            ui.spinner();
                            ui.label("loading dataset...");
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| self.draw_controls(ui, is_reloading));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_reloading {
                ui.disable();
            }
            self.draw_chart(ui);
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui, is_reloading: bool) {
        ui.add_space(6.0);
        ui.heading("Layout");

        let grouped = self.chart.mode() == DisplayMode::Grouped;
        ui.horizontal(|ui| {
            // Clicking the active button again restarts the layout on
            // purpose.
            if ui.selectable_label(grouped, "All songs").clicked() {
                self.chart.toggle_mode(None);
            }
            if ui.selectable_label(!grouped, "Split by region").clicked() {
                self.chart.toggle_mode(Some(SplitCriterion::Region));
            }
        });

        ui.add_space(10.0);
        ui.heading("Dataset");
        let mut slider_year = self.selected_year;
        let slider_text = DATASET_YEARS[slider_year];
        let year_slider = ui.add_enabled(
            !is_reloading,
            Slider::new(&mut slider_year, 0..=DATASET_YEARS.len() - 1)
                .show_value(false)
                .text(slider_text),
        );
        if year_slider.changed() && slider_year != self.selected_year {
            self.requested_year = Some(slider_year);
        }

        ui.add_space(10.0);
        ui.heading("Appearance");
        if ui.button("Shuffle colors").clicked() {
            self.palette_shuffles += 1;
            self.chart.set_colors(shuffled_palette(self.palette_shuffles));
        }

        let emphasized = self.chart.radial_exponent() > 2.0;
        if ui
            .selectable_label(emphasized, "Emphasize large bubbles")
            .clicked()
        {
            let exponent = if emphasized { 2.0 } else { 2.5 };
            self.chart.set_radial_exponent(exponent);
        }
    }
}
