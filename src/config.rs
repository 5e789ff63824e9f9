use serde::Deserialize;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3222;
const DEFAULT_ASSETS_DIR: &str = "mobile";

/// Settings read from `vidshare.toml`. Every key is optional; unknown keys are ignored.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub dir: Option<PathBuf>,
    pub port: Option<u16>,
    pub assets: Option<PathBuf>,
    pub host: Option<Ipv4Addr>,
    pub localhost: Option<bool>,
}

/// Startup settings after merging CLI flags, the config file and defaults.
/// The LAN address is not part of it yet; see [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub port: u16,
    pub assets: PathBuf,
    pub host: Option<Ipv4Addr>,
    pub localhost: bool,
}

impl Config {
    /// CLI wins over the file, the file wins over defaults. Relative paths are
    /// made absolute against the current directory.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        let dir = args
            .dir
            .clone()
            .or(file.dir)
            .ok_or(ConfigError::MissingDirectory)?;
        let assets = args
            .assets
            .clone()
            .or(file.assets)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        Ok(Config {
            dir: std::path::absolute(dir)?,
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            assets: std::path::absolute(assets)?,
            host: args.host.or(file.host),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        })
    }

    /// Freeze into the immutable server configuration, using `lan_host` when
    /// no address was configured explicitly.
    pub fn into_server_config(self, lan_host: impl FnOnce() -> Ipv4Addr) -> ServerConfig {
        let host = if self.localhost {
            Ipv4Addr::LOCALHOST
        } else {
            self.host.unwrap_or_else(lan_host)
        };
        ServerConfig {
            watched_dir: self.dir,
            port: self.port,
            host,
            assets_dir: self.assets,
            localhost: self.localhost,
        }
    }
}

/// Everything the media server needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory whose videos are published.
    pub watched_dir: PathBuf,
    pub port: u16,
    /// Address written into catalog URLs.
    pub host: Ipv4Addr,
    /// Root of the bundled web UI.
    pub assets_dir: PathBuf,
    /// Listen on 127.0.0.1 instead of 0.0.0.0.
    pub localhost: bool,
}

impl ServerConfig {
    /// `http://host:port`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn bind_addr(&self) -> std::net::SocketAddr {
        let ip = if self.localhost {
            Ipv4Addr::LOCALHOST
        } else {
            Ipv4Addr::UNSPECIFIED
        };
        (ip, self.port).into()
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("vidshare.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("vidshare").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no video directory given (pass DIR or set `dir` in the config file)")]
    MissingDirectory,
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
