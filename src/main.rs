use actix_web::{web, App, HttpServer};
use clap::Parser;
use foliochat::cli::{build_service, commands::{Cli, Commands}, run_cli};
use foliochat::config::AppConfig;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        if let Err(e) = run_cli(cli.command, &cli.config).await {
            error!("{:#}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    info!("Starting portfolio chat server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (store, service) = match build_service(&config) {
        Ok(built) => built,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    let service = web::Data::new(service);

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(foliochat::api::cors())
            .configure(foliochat::api::configure)
    })
    .bind((host, port))?
    .run()
    .await?;

    info!("Server stopped, closing chat store");
    if let Err(e) = store.teardown() {
        error!("Failed to checkpoint chat store: {}", e);
    }
    Ok(())
}
