use clap::Parser;
use directories::ProjectDirs;
use rolo::api::AssistantApi;
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod args;
mod cli;
use args::Cli;
use cli::Repl;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir);
    log::debug!("using data dir {}", data_dir.display());

    let config = RoloConfig::load(&data_dir)?;
    let color = config.color;
    let api = AssistantApi::open(FileStore::new(data_dir), config)?;

    let mut repl = Repl::new(api, color);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rolo=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// `--data-dir`/`ROLO_DATA` first, then the platform data dir, then the
/// working directory.
fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| ProjectDirs::from("com", "rolo", "rolo").map(|d| d.data_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
