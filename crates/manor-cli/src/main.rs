//! Terminal front end for the Manor mystery.

mod play;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use manor_engine::SessionConfig;
use manor_engine::save::DEFAULT_SAVE_PATH;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "manor",
    about = "A murder mystery text adventure set in a country manor",
    version
)]
struct Cli {
    /// Save file used by `load` and the autosave
    #[arg(short, long, default_value = DEFAULT_SAVE_PATH)]
    save_file: PathBuf,

    /// Do not save after every command
    #[arg(long)]
    no_autosave: bool,

    /// Load the save file before the first prompt
    #[arg(long)]
    resume: bool,

    /// Skip the opening narration
    #[arg(long)]
    no_intro: bool,
}

fn main() {
    // Game text owns stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::default()
        .with_save_path(cli.save_file)
        .with_autosave(!cli.no_autosave);

    let options = play::Options {
        resume: cli.resume,
        intro: !cli.no_intro,
    };

    if let Err(e) = play::run(config, options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
