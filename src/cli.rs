use clap::Parser;
use std::net::Ipv4Addr;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "vidshare",
    about = "Share a folder of videos with phones and tablets on the same network",
    long_about = None,
    version,
)]
pub struct Args {
    /// Directory containing the videos to share
    pub dir: Option<PathBuf>,

    /// HTTP port to listen on [default: 3222]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the bundled web UI (index.html and friends) [default: ./mobile]
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// IPv4 address to publish in catalog URLs instead of the detected LAN address
    #[arg(long, value_name = "IPV4")]
    pub host: Option<Ipv4Addr>,

    /// Path to TOML config file (overrides default search: ./vidshare.toml, ~/.config/vidshare/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces
    #[arg(long)]
    pub localhost: bool,
}
