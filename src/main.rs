use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info};

use ipl_predictor::config::Config;
use ipl_predictor::encoding::{Dimension, TABLE_VERSION};
use ipl_predictor::gateway::PredictionGateway;
use ipl_predictor::model::{load_predictor, Predictor};
use ipl_predictor::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let team = Dimension::Team.table();
    let venue = Dimension::Venue.table();
    let city = Dimension::City.table();
    info!(
        "Category tables {}: {} teams, {} venues, {} cities",
        TABLE_VERSION,
        team.len(),
        venue.len(),
        city.len()
    );

    // A missing or corrupt model degrades to "model unavailable" responses
    // unless --require-model is set.
    let gateway = match load_predictor(&config.model_path) {
        Ok(predictor) => {
            info!(
                "🟢 Model '{}' loaded from {}",
                predictor.name(),
                config.model_path.display()
            );
            PredictionGateway::new(predictor)
        }
        Err(e) if config.require_model => {
            return Err(anyhow::Error::new(e).context("failed to load model"));
        }
        Err(e) => {
            error!("🔴 Error loading model: {}", e);
            PredictionGateway::unavailable()
        }
    };

    let app = web::router(AppState { gateway });
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
