//! Client for the third-party form-relay service.
//!
//! The relay accepts one multipart POST per submission and answers with a
//! JSON body carrying a boolean `success` flag and an optional `message`
//! explaining a rejection. No retries and no explicit timeout are applied;
//! a failed submission requires the user to resubmit.

use reqwest::multipart::Form;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub mod errors;

pub use errors::{RelayError, RelayResult};

/// Endpoint of the form-relay service that forwards submissions via email.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Static credential authorizing use of the relay endpoint. Embedded in the
/// client because the relay has no notion of per-user auth.
pub const ACCESS_KEY: &str = "9305e71b-eb91-4f23-8274-b47122e0785f";

/// Message surfaced to the user when a submission fails without a
/// server-provided reason, whether the relay rejected it silently or the
/// transport itself failed.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// One contact-form submission as entered by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

/// Wire shape of the relay's JSON response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Result of a submission the relay actually answered.
#[derive(Clone, Debug, PartialEq)]
pub enum RelayOutcome {
    Accepted,
    Rejected { reason: String },
}

/// Client for the form-relay endpoint
#[derive(Clone)]
pub struct RelayClient {
    http_client: Client,
    endpoint: String,
}

impl RelayClient {
    /// Create a new relay client
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            endpoint: RELAY_ENDPOINT.to_string(),
        }
    }

    /// Submit one contact request to the relay.
    #[instrument(skip(self), err)]
    pub async fn submit(&self, request: &ContactRequest) -> RelayResult<RelayOutcome> {
        let form = Form::new()
            .text("name", request.name.clone())
            .text("email", request.email.clone())
            .text("message", request.message.clone())
            .text("phone_number", request.phone_number.clone())
            .text("access_key", ACCESS_KEY);

        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Network {
                message: format!("Failed to reach relay endpoint: {}", e),
            })?;

        let body: RelayResponse =
            response
                .json()
                .await
                .map_err(|e| RelayError::InvalidResponse {
                    message: format!("Failed to parse relay response: {}", e),
                })?;

        if body.success {
            Ok(RelayOutcome::Accepted)
        } else {
            Ok(RelayOutcome::Rejected {
                reason: body
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            })
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The relay answers `{"success": true, "message": "..."}` on acceptance
    /// and `{"success": false, "message": "reason"}` on rejection. The
    /// `message` field is not guaranteed to be present.
    #[test]
    fn test_relay_response_parsing() {
        let accepted: RelayResponse =
            serde_json::from_value(json!({"success": true, "message": "Email sent"})).unwrap();
        assert!(accepted.success);
        assert_eq!(accepted.message.as_deref(), Some("Email sent"));

        let rejected: RelayResponse =
            serde_json::from_value(json!({"success": false, "message": "Invalid access key"}))
                .unwrap();
        assert!(!rejected.success);

        let bare: RelayResponse = serde_json::from_value(json!({"success": false})).unwrap();
        assert!(!bare.success);
        assert_eq!(bare.message, None);
    }

    #[test]
    fn test_rejection_without_reason_uses_generic_message() {
        let body = RelayResponse {
            success: false,
            message: None,
        };
        let reason = body
            .message
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        assert_eq!(reason, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = RelayError::InvalidResponse {
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid relay response: EOF while parsing");
    }
}
