use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};

use crate::chart::{BubbleChart, default_palette};
use crate::data::{Record, load_dataset};

mod controls;
mod view;

pub const DATASET_YEARS: [&str; 3] = ["2019", "2018", "2017"];

pub struct BubbleApp {
    data_dir: PathBuf,
    state: AppState,
    reload_rx: Option<(usize, Receiver<Result<Vec<Record>, String>>)>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Vec<Record>, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    chart: BubbleChart,
    selected_year: usize,
    requested_year: Option<usize>,
    palette_shuffles: u64,
    hovered: Option<usize>,
}

impl ViewModel {
    fn new(records: Vec<Record>, selected_year: usize) -> Self {
        Self {
            chart: BubbleChart::new(records, default_palette()),
            selected_year,
            requested_year: None,
            palette_shuffles: 0,
            hovered: None,
        }
    }
}

impl BubbleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        let state = Self::start_load(&data_dir, 0);
        Self {
            data_dir,
            state,
            reload_rx: None,
        }
    }

    fn dataset_path(data_dir: &Path, year_index: usize) -> PathBuf {
        data_dir.join(format!("{}.json", DATASET_YEARS[year_index]))
    }

    fn spawn_load(
        data_dir: &Path,
        year_index: usize,
    ) -> Receiver<Result<Vec<Record>, String>> {
        let (tx, rx) = mpsc::channel();
        let path = Self::dataset_path(data_dir, year_index);

        thread::spawn(move || {
            let result = load_dataset(&path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_dir: &Path, year_index: usize) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_dir, year_index),
        }
    }
}

impl eframe::App for BubbleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(records) => AppState::Ready(Box::new(ViewModel::new(records, 0))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading streaming chart...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load dataset");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(&self.data_dir, 0));
                    }
                });
            }
            AppState::Ready(model) => {
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, is_reloading);

                if let Some(year_index) = model.requested_year.take()
                    && self.reload_rx.is_none()
                    && year_index != model.selected_year
                {
                    self.reload_rx =
                        Some((year_index, Self::spawn_load(&self.data_dir, year_index)));
                }

                if let Some((year_index, rx)) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(Ok(records)) => {
                            model.chart.set_dataset(records);
                            model.selected_year = year_index;
                            model.hovered = None;
                        }
                        Ok(Err(error)) => {
                            transition = Some(AppState::Error(error));
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some((year_index, rx));
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background dataset loader disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
