#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod poster_source;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Divenskaya Library - public site
#[derive(Parser, Debug)]
#[command(name = "divlib-desktop")]
#[command(about = "Дивенская библиотека — каталог, сотрудники и фотогалерея")]
struct Args {
    /// Directory holding the site's JSON data and media
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Prefer an explicit flag, then ./data next to the binary's working
    // directory, then the per-user data location
    let data_dir = args.data_dir.unwrap_or_else(|| {
        let local = PathBuf::from("data");
        if local.is_dir() {
            local
        } else {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("divlib")
                .join("data")
        }
    });
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting library site with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Дивенская библиотека")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
