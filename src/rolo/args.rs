use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo", version)]
#[command(about = "Interactive contact book and note taker", long_about = None)]
pub struct Cli {
    /// Directory holding contacts.json, notes.txt and config.json
    #[arg(long, env = "ROLO_DATA", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
