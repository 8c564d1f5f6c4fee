use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use taskdeck::api::TrackerClient;
use taskdeck::core::config;
use taskdeck::tui;

#[derive(Parser)]
#[command(name = "taskdeck", about = "Terminal UI for browsing task-tracker projects")]
struct Args {
    /// API token for the tracker service (overrides config file and TASKDECK_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Base URL of the tracker REST API
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the TUI while it runs
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("taskdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let resolved = match config::resolve(file_config, args.token, args.base_url) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Taskdeck starting up against {}", resolved.base_url);

    let client = TrackerClient::new(resolved.token, resolved.base_url);

    match tui::run(client) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
