use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use standing_data_api::cli::{self, Args};
use standing_data_api::{StandingDataStore, api};

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    cli::init_tracing(args.log_level(&config));

    info!(
        "Starting Standing Data API v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Data root: {}", config.data.root.display());

    if !config.data.root.is_dir() {
        // The server still starts; queries will report the unusable root.
        warn!(
            "Data root does not exist yet: {}",
            config.data.root.display()
        );
    }

    let store = web::Data::new(StandingDataStore::new(config.data.root.clone()));

    let bind_address = config.bind_address();
    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(store.clone())
            .configure(api::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
