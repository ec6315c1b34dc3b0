//! Account service client
//!
//! One endpoint, one call: POST the registration payload as JSON and map
//! the result into a [`SubmitOutcome`]. Response bodies are not inspected;
//! any 2xx is success and everything else is a generic rejection.

use serde::Serialize;

pub const SIGNUP_PATH: &str = "/api/users/signup";

/// The payload sent to the account service.
///
/// The confirmation field is deliberately absent: it is a client-side check
/// and must never go over the wire.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Manual Debug so the password cannot end up in a log line.
impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What came back from the account service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response; the account exists now.
    Created,
    /// Any non-2xx status.
    Rejected { status: u16 },
    /// The request never completed (connection refused, DNS, ...).
    Failed { reason: String },
}

#[derive(Clone, Debug)]
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SignupClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn signup_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SIGNUP_PATH)
    }

    /// Submit a registration. Never fails at the call site; every failure
    /// mode is folded into the outcome so the UI has one thing to match on.
    pub async fn signup(&self, request: &SignupRequest) -> SubmitOutcome {
        let result = self.http.post(self.signup_url()).json(request).send().await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!("registration accepted for {}", request.email);
                SubmitOutcome::Created
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!("registration rejected with status {status}");
                SubmitOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::error!("registration request failed: {e}");
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> SignupRequest {
        SignupRequest {
            name: "A".into(),
            email: "a@b.com".into(),
            password: "Abcdef1!".into(),
        }
    }

    #[test]
    fn url_joins_without_doubled_slash() {
        let client = SignupClient::new("http://localhost:1350/");
        assert_eq!(client.signup_url(), "http://localhost:1350/api/users/signup");

        let client = SignupClient::new("http://localhost:1350");
        assert_eq!(client.signup_url(), "http://localhost:1350/api/users/signup");
    }

    #[test]
    fn request_serializes_exactly_three_fields() {
        let value = serde_json::to_value(request()).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "password": "Abcdef1!",
            })
        );
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let formatted = format!("{:?}", request());
        assert!(!formatted.contains("Abcdef1!"));
        assert!(formatted.contains("<redacted>"));
    }
}
