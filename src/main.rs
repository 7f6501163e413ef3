mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use clap::Parser;

use crate::{
    config::{Cli, Config},
    error::AppError,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_cli(Cli::parse())?;

    tracing::info!("Starting {} bot", config.role);

    startup::run(config).await
}
