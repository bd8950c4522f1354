use clap::Parser;

mod app_context;
mod cli;
mod geo;
mod health;
mod http;
mod locations;
mod logging;
mod nominatim;
mod scoring;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let app_context = app_context::init(&args);
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Serving.");
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
