use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive shell for browsing, filtering and editing a student roster", long_about = None)]
pub struct Cli {
    /// Number of students `open` generates when no count is given
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Seed `open` uses when no seed is given
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory holding config.json (defaults to the per-user config dir)
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Write the effective settings back to config.json before starting
    #[arg(long)]
    pub save_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
