mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod utils;

use std::io;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use crate::config::Config;
use crate::db::PgEmployeeStore;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| startup_error("Invalid configuration", err))?;

    // Initialize the record store
    let store = PgEmployeeStore::connect(&config)
        .await
        .map_err(|err| startup_error("Failed to connect to the database", err))?;
    store
        .ensure_schema()
        .await
        .map_err(|err| startup_error("Failed to prepare the employee table", err))?;
    let store = web::Data::new(store);

    let bind_address = config.bind_address();
    info!("Starting server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure::<PgEmployeeStore>)
    })
    .bind(bind_address)?
    .run()
    .await
}
