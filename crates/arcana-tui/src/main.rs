//! Standalone TUI binary for Arcana.

use std::process;
use std::sync::Arc;

use arcana_oracle::{FixedProvider, NarrativeProvider, ProviderConfig};
use arcana_reading::ReadingDriver;
use arcana_tui::cli::Args;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = arcana_tui::logging::init(args.log_file.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let config = match args.reading_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let provider: Arc<dyn NarrativeProvider> = if args.offline {
        Arc::new(FixedProvider::offline())
    } else {
        match ProviderConfig::from_env().with_timeout(args.timeout()).build() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            process::exit(1);
        }
    };
    let _guard = runtime.enter();

    tracing::info!(seed = config.seed, offline = args.offline, "starting arcana");
    let driver = ReadingDriver::new(config, provider);
    let app = arcana_tui::app::TuiApp::new(driver, args.question);

    if let Err(e) = arcana_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
