//! Machine Learning Server Client
//!
//! The secured path: a login exchange yields a bearer token which is then
//! used for the manual-transmission prediction call. The token is fetched
//! fresh on every call and discarded afterwards, no persisted lifecycle.

use serde::{Deserialize, Serialize};

use super::{BackendError, PredictionBackend, PredictionInput};
use crate::constants;

/// Machine Learning Server configuration
#[derive(Debug, Clone)]
pub struct MlsConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Default for MlsConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_mls_url(),
            username: constants::get_mls_user(),
            password: constants::get_mls_password(),
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct ManualTransmissionRequest {
    hp: f64,
    wt: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceResult {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    output_parameters: Option<OutputParameters>,
}

#[derive(Debug, Deserialize)]
struct OutputParameters {
    #[serde(default)]
    answer: Option<f64>,
}

/// Machine Learning Server client
pub struct MlsBackend {
    config: MlsConfig,
    http_client: reqwest::Client,
}

impl MlsBackend {
    pub fn new(config: MlsConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Obtain an access token, one round trip, no retry
    async fn login(&self) -> Result<String, BackendError> {
        let url = format!("{}/login", self.config.base_url);

        log::info!("Logging in to Machine Learning Server: {}", self.config.base_url);

        let request = LoginRequest {
            username: &self.config.username,
            password: &self.config.password,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Login failed ({}): {}", status, error_text);
            return Err(BackendError::AuthFailed(error_text));
        }

        let result: LoginResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(result.access_token)
    }
}

impl PredictionBackend for MlsBackend {
    fn label(&self) -> &'static str {
        "Machine Learning Server"
    }

    async fn predict(&self, input: PredictionInput) -> Result<Option<f64>, BackendError> {
        // Strictly linear: unauthenticated -> token-acquired -> result-received.
        // A login failure means the prediction request is never issued.
        let token = self.login().await?;

        let url = format!("{}/api/manual-transmission/v1.0", self.config.base_url);

        let request = ManualTransmissionRequest {
            hp: input.horsepower,
            wt: input.weight,
        };

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::Server(response.status().as_u16()));
        }

        let result: ServiceResult = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(extract_answer(result))
    }
}

/// Pull the answer out of the result envelope
///
/// The answer counts only when the success flag is present and true. A
/// success=false result is a rejected prediction, not an error.
fn extract_answer(result: ServiceResult) -> Option<f64> {
    if result.success == Some(true) {
        result.output_parameters.and_then(|p| p.answer)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ServiceResult {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_successful_result() {
        let result = parse(r#"{"success": true, "outputParameters": {"answer": 30.1}}"#);
        assert_eq!(extract_answer(result), Some(30.1));
    }

    #[test]
    fn test_unsuccessful_result() {
        let result = parse(r#"{"success": false}"#);
        assert_eq!(extract_answer(result), None);
    }

    #[test]
    fn test_null_answer_propagates_as_absent() {
        let result = parse(r#"{"success": true, "outputParameters": {"answer": null}}"#);
        assert_eq!(extract_answer(result), None);
    }

    #[test]
    fn test_missing_success_flag() {
        let result = parse(r#"{"outputParameters": {"answer": 30.1}}"#);
        assert_eq!(extract_answer(result), None);
    }

    #[test]
    fn test_successful_without_output_parameters() {
        let result = parse(r#"{"success": true}"#);
        assert_eq!(extract_answer(result), None);
    }

    #[tokio::test]
    async fn test_login_failure_short_circuits_predict() {
        // Port 9 (discard) is closed on loopback, the connection is refused
        // before any prediction request can be issued.
        let backend = MlsBackend::new(MlsConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
        });

        let err = backend
            .predict(PredictionInput::new(120.0, 2.8))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Network(_)));
    }
}
