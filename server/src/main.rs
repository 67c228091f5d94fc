mod config;
mod errors;
mod messages;
mod server_acceptor;
mod server_actors;

use crate::config::Config;
use crate::server_acceptor::acceptor::Acceptor;
use crate::server_acceptor::routes::{AppState, router};
use crate::server_actors::services::nearby_restaurants::NearbyRestaurantsService;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::new("Server", Color::BrightBlue);

    let config = Config::load()?;
    let addr = config.socket_addr()?;
    logger.info(format!("Starting with {config:?}"));

    let storage_addr = Storage::from_file(&config.restaurants_file).start();
    let search_addr = NearbyRestaurantsService::new(storage_addr.clone()).start();

    let app = router(
        AppState::new(search_addr, storage_addr),
        config.cors_max_age(),
    );
    Acceptor::new(addr, app).start().await?;

    logger.info("Server shutting down...");
    System::current().stop();
    Ok(())
}
