//! Outbound contract with the remote mobile-number authority.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::ServiceError;

/// Placeholder substituted with the phone number in the configured URL template.
pub const MOBILE_PLACEHOLDER: &str = "{mobile}";

#[async_trait]
pub trait MobileValidator: Send + Sync {
    /// Ask the remote authority whether `mobile` is a real, well-formed number.
    /// A transport or decoding fault maps to `ServiceError::ValidatorUnavailable`
    /// so callers can tell "invalid number" apart from "authority unreachable".
    async fn is_valid(&self, mobile: &str) -> Result<bool, ServiceError>;
}

/// Reply shape of the remote validation endpoint; extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ValidationReply {
    valid: bool,
}

/// HTTP client issuing one GET per check against a URL template.
pub struct HttpMobileValidator {
    client: reqwest::Client,
    url_template: String,
}

impl HttpMobileValidator {
    /// The timeout is the only cancellation policy on the create/update path;
    /// without it a hanging validator stalls the whole request.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::ValidatorUnavailable(e.to_string()))?;
        Ok(Self { client, url_template: url_template.into() })
    }

    fn render_url(&self, mobile: &str) -> String {
        self.url_template.replace(MOBILE_PLACEHOLDER, mobile)
    }
}

#[async_trait]
impl MobileValidator for HttpMobileValidator {
    async fn is_valid(&self, mobile: &str) -> Result<bool, ServiceError> {
        let url = self.render_url(mobile);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::ValidatorUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::ValidatorUnavailable(e.to_string()))?;
        let reply = resp
            .json::<ValidationReply>()
            .await
            .map_err(|e| ServiceError::ValidatorUnavailable(e.to_string()))?;
        debug!(mobile = %mobile, valid = reply.valid, "mobile validator replied");
        Ok(reply.valid)
    }
}

/// Programmable validator for tests: fixed verdict or simulated outage,
/// recording every number it is asked about.
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    pub struct MockMobileValidator {
        verdict: bool,
        unavailable: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockMobileValidator {
        pub fn accepting() -> Self {
            Self { verdict: true, unavailable: false, calls: Mutex::new(Vec::new()) }
        }

        pub fn rejecting() -> Self {
            Self { verdict: false, unavailable: false, calls: Mutex::new(Vec::new()) }
        }

        pub fn unreachable() -> Self {
            Self { verdict: false, unavailable: true, calls: Mutex::new(Vec::new()) }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MobileValidator for MockMobileValidator {
        async fn is_valid(&self, mobile: &str) -> Result<bool, ServiceError> {
            self.calls.lock().unwrap().push(mobile.to_string());
            if self.unavailable {
                return Err(ServiceError::ValidatorUnavailable("mock validator offline".into()));
            }
            Ok(self.verdict)
        }
    }
}
