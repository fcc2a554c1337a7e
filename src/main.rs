//! Closecast - Next-day closing price estimate from one session's market data
//!
//! This binary is a thin command-line front for the prediction core. It
//! loads the fitted scaler and model artifacts, validates the six input
//! fields, and prints one short result string.
//!
//! # Usage
//! ```sh
//! closecast --open 2750.50 --high 2780.25 --low 2735.00 \
//!           --close 2765.80 --volume 1250000 --vwap 2760.15
//! closecast --example
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Path to the serialized regression model (default: data/ml/price_model.json)
//! - `SCALER_PATH` - Path to the serialized feature scaler (default: data/ml/scaler.json)

use anyhow::Result;
use clap::Parser;
use closecast::application::predictor::PricePredictor;
use closecast::config::ArtifactConfig;
use closecast::infrastructure::smartcore_model::SmartCoreModel;
use closecast::infrastructure::standard_scaler::StandardScaler;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

/// Sample session data, same row the original form shipped as its example.
const EXAMPLE_ROW: [f64; 6] = [2750.50, 2780.25, 2735.00, 2765.80, 1_250_000.0, 2760.15];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Price at market opening
    #[arg(long)]
    open: Option<f64>,

    /// Highest price during the session
    #[arg(long)]
    high: Option<f64>,

    /// Lowest price during the session
    #[arg(long)]
    low: Option<f64>,

    /// Closing price of the session
    #[arg(long)]
    close: Option<f64>,

    /// Number of shares traded
    #[arg(long)]
    volume: Option<f64>,

    /// Volume-weighted average price
    #[arg(long)]
    vwap: Option<f64>,

    /// Use the bundled example row instead of individual fields
    #[arg(long)]
    example: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    let config = ArtifactConfig::from_env()?;
    info!(
        "Loading artifacts: model={:?}, scaler={:?}",
        config.model_path, config.scaler_path
    );

    let scaler = Arc::new(StandardScaler::load(&config.scaler_path)?);
    let model = Arc::new(SmartCoreModel::load(&config.model_path)?);
    let predictor = PricePredictor::new(scaler, model);

    let (open, high, low, close, volume, vwap) = if args.example {
        let [open, high, low, close, volume, vwap] = EXAMPLE_ROW;
        (
            Some(open),
            Some(high),
            Some(low),
            Some(close),
            Some(volume),
            Some(vwap),
        )
    } else {
        (
            args.open,
            args.high,
            args.low,
            args.close,
            args.volume,
            args.vwap,
        )
    };

    println!(
        "{}",
        predictor.predict_display(open, high, low, close, volume, vwap)
    );

    Ok(())
}
