//! Binary entry point: wires configuration, storage, and the HTTP server.

use std::io;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paralympics_api::api::{self, health::HealthState};
use paralympics_api::auth::TokenService;
use paralympics_api::config::Config;
use paralympics_api::outbound::persistence::{
    DbPool, EventRepository, PoolConfig, RegionRepository, UserRepository,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = Config::parse();
    let secret = config.load_token_secret().map_err(io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(&config.database_url)).map_err(io::Error::other)?;
    pool.run_migrations().map_err(io::Error::other)?;

    let tokens = web::Data::new(TokenService::new(&secret));
    let regions = web::Data::new(RegionRepository::new(pool.clone()));
    let events = web::Data::new(EventRepository::new(pool.clone()));
    let users = web::Data::new(UserRepository::new(pool));
    let health = web::Data::new(HealthState::default());

    info!(bind_addr = %config.bind_addr, database = %config.database_url, "starting server");

    let app_health = health.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(api::json_config())
            .app_data(api::path_config())
            .app_data(tokens.clone())
            .app_data(regions.clone())
            .app_data(events.clone())
            .app_data(users.clone())
            .app_data(app_health.clone())
            .configure(api::configure)
    })
    .bind(&config.bind_addr)?
    .run();

    health.mark_ready();
    server.await
}
