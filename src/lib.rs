//! Share a folder of videos on the local network: scan it, publish a JSON
//! catalog of LAN-reachable URLs, and stream the files with byte-range support.

pub mod cli;
pub mod config;
pub mod http;
pub mod media;
pub mod net;
pub mod server;
