//! mtcars-probe - Diagnostic client for deployed prediction services
//!
//! Exercises the same manual-transmission regression model through two
//! deployments: a plain Plumber endpoint and a secured Machine Learning
//! Server. Both are called once, in sequence, and each labeled result is
//! printed to stdout.

mod backend;
pub mod constants;

use backend::{
    mls::MlsConfig, plumber::PlumberConfig, BackendError, MlsBackend, PlumberBackend,
    PredictionBackend, PredictionInput,
};

/// Probe inputs: hp=120, wt=2.8 (a mid-range mtcars observation)
const PROBE_INPUT: PredictionInput = PredictionInput {
    horsepower: 120.0,
    weight: 2.8,
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting mtcars-probe v{}", constants::APP_VERSION);

    // One error boundary: the first failing backend aborts the remaining
    // work and the process exits non-zero.
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BackendError> {
    report(&PlumberBackend::new(PlumberConfig::default())).await?;
    report(&MlsBackend::new(MlsConfig::default())).await?;
    Ok(())
}

/// Run one backend and print its labeled result line
async fn report<B: PredictionBackend>(backend: &B) -> Result<(), BackendError> {
    let answer = backend.predict(PROBE_INPUT).await?;
    println!("{} Result: {}", backend.label(), format_answer(answer));
    Ok(())
}

/// An absent answer renders as an empty field, matching the result-line shape
fn format_answer(answer: Option<f64>) -> String {
    answer.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_present_answer() {
        assert_eq!(format_answer(Some(28.5)), "28.5");
    }

    #[test]
    fn test_format_absent_answer() {
        assert_eq!(format_answer(None), "");
    }
}
