mod app;
mod chart;
mod data;
mod util;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory containing one <year>.json dataset file per chart year.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1180.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "stream-bubbles",
        options,
        Box::new(move |cc| Ok(Box::new(app::BubbleApp::new(cc, args.data_dir.clone())))),
    )
}
