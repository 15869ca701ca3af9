//! Prediction Backends
//!
//! Two call paths to the same deployed regression model:
//! - Plumber: plain form-encoded endpoint, no auth
//! - Machine Learning Server: login exchange, then bearer-authenticated call
//!
//! Both are stateless leaves. The entry point runs them in sequence.

pub mod mls;
pub mod plumber;

pub use mls::MlsBackend;
pub use plumber::PlumberBackend;

/// Input to the manual-transmission regression model
#[derive(Debug, Clone, Copy)]
pub struct PredictionInput {
    pub horsepower: f64,
    pub weight: f64,
}

impl PredictionInput {
    pub fn new(horsepower: f64, weight: f64) -> Self {
        Self { horsepower, weight }
    }
}

/// A remote prediction service
///
/// `Ok(None)` means the service answered but produced no value (empty
/// result array, or an explicit success=false). That is data, not an error.
#[allow(async_fn_in_trait)]
pub trait PredictionBackend {
    /// Human-readable label used in the result line
    fn label(&self) -> &'static str;

    /// Run one prediction round trip
    async fn predict(&self, input: PredictionInput) -> Result<Option<f64>, BackendError>;
}

/// Backend client errors
#[derive(Debug, Clone)]
pub enum BackendError {
    Network(String),
    Server(u16),
    Parse(String),
    AuthFailed(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server(code) => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::AuthFailed(e) => write!(f, "Authentication failed: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}
