//! Plumber Endpoint Client
//!
//! Calls the containerized Plumber API: a form-encoded POST with `hp` and
//! `wt` fields, answered by a JSON array of nullable numbers, e.g. `[28.5]`.

use super::{BackendError, PredictionBackend, PredictionInput};
use crate::constants;

/// Plumber endpoint configuration
#[derive(Debug, Clone)]
pub struct PlumberConfig {
    pub endpoint: String,
}

impl Default for PlumberConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::get_plumber_endpoint(),
        }
    }
}

/// Plumber API client
pub struct PlumberBackend {
    config: PlumberConfig,
    http_client: reqwest::Client,
}

impl PlumberBackend {
    pub fn new(config: PlumberConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

impl PredictionBackend for PlumberBackend {
    fn label(&self) -> &'static str {
        "Plumber"
    }

    async fn predict(&self, input: PredictionInput) -> Result<Option<f64>, BackendError> {
        log::info!("Calling Plumber endpoint: {}", self.config.endpoint);

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .form(&form_fields(input))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::Server(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        parse_prediction_body(&body)
    }
}

/// Form fields for the request body
///
/// `f64` Display formatting always uses `.` as the decimal separator, so the
/// encoding is locale-independent.
fn form_fields(input: PredictionInput) -> [(&'static str, String); 2] {
    [
        ("hp", input.horsepower.to_string()),
        ("wt", input.weight.to_string()),
    ]
}

/// Parse the response body: a JSON array of nullable numbers
///
/// Returns the first element, absent when the array is empty or the element
/// itself is null.
fn parse_prediction_body(body: &str) -> Result<Option<f64>, BackendError> {
    let values: Vec<Option<f64>> =
        serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;

    Ok(values.first().copied().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_body() {
        assert_eq!(parse_prediction_body("[28.5]").unwrap(), Some(28.5));
    }

    #[test]
    fn test_empty_array_body() {
        assert_eq!(parse_prediction_body("[]").unwrap(), None);
    }

    #[test]
    fn test_null_element_body() {
        assert_eq!(parse_prediction_body("[null]").unwrap(), None);
    }

    #[test]
    fn test_extra_elements_ignored() {
        assert_eq!(parse_prediction_body("[28.5, 30.1]").unwrap(), Some(28.5));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = parse_prediction_body("not json").unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[test]
    fn test_form_encoding_is_locale_independent() {
        let fields = form_fields(PredictionInput::new(120.0, 2.8));
        assert_eq!(fields[0], ("hp", "120".to_string()));
        assert_eq!(fields[1], ("wt", "2.8".to_string()));
    }
}
