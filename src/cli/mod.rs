use crate::storage::consts::DEFAULT_MAX_STORED_SESSIONS;
use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origins allowed to call the API from a browser.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000", "https://vigeoguessr.com"])]
    pub allowed_origins: Vec<Url>,
    /// Base URL of a Nominatim instance; land checks are skipped when absent.
    #[arg(long)]
    pub nominatim_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value_t = 5000)]
    pub nominatim_timeout_ms: u64,
    /// Oldest score sessions are forgotten once this many are kept.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MAX_STORED_SESSIONS)]
    pub max_stored_sessions: usize,
}
