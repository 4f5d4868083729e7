mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting game night bot");

    let state = BotState::new(config);
    let client = bot::start::init_bot(state).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Bot shut down");

    Ok(())
}
