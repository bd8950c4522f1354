use crate::cli::Args;
use crate::nominatim::NominatimClient;
use crate::storage::interface::IScoreStorage;
use crate::storage::scores::HashMapScoreStorage;
use std::time::Duration;

#[derive(Clone, Default)]
pub struct AppContext<SS: IScoreStorage> {
    pub scores: SS,
    pub nominatim: Option<NominatimClient>,
}

pub fn init(args: &Args) -> AppContext<HashMapScoreStorage> {
    let nominatim = args.nominatim_url.as_ref().map(|base_url| {
        let timeout = Duration::from_millis(args.nominatim_timeout_ms);
        NominatimClient::new(base_url.clone(), timeout)
            .expect("Failed to build the Nominatim HTTP client.")
    });
    match &args.nominatim_url {
        Some(base_url) => tracing::info!(%base_url, "Land checks are enabled."),
        None => tracing::info!("Land checks are disabled."),
    }
    AppContext {
        scores: HashMapScoreStorage::with_capacity(args.max_stored_sessions),
        nominatim,
    }
}
