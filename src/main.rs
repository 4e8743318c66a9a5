use clap::Parser;
use log::{info, warn};
use people_picker::core::config;
use people_picker::core::dataset::Dataset;
use people_picker::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "people-picker", about = "Search and pick a person from a fixed list")]
struct Args {
    /// Log at debug level instead of info
    #[arg(short, long)]
    debug: bool,

    /// Where to write the log file
    #[arg(long, default_value = "people-picker.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    info!("people-picker starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{e}; falling back to defaults");
        config::PickerConfig::default()
    });
    let resolved = config::resolve(&file_config);

    let dataset = Dataset::bundled().map_err(std::io::Error::other)?;

    tui::run(resolved, dataset)
}
