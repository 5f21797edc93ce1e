use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dramalist",
    about = "Track the dramas you've watched from your browser, with PDF export",
    long_about = None,
    version,
)]
pub struct Args {
    /// HTTP port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// CSV file holding the drama list [default: dramas.csv]
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Directory that gets one folder per drama [default: Dramas]
    #[arg(short, long, value_name = "DIR")]
    pub dramas_dir: Option<PathBuf>,

    /// Path to TOML config file (overrides default search: ./dramalist.toml, ~/.config/dramalist/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces
    #[arg(long)]
    pub localhost: bool,
}
