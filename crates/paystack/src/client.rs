//! Paystack HTTP client implementation.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::error::PaystackError;
use crate::types::{
    ChargeAuthorizationRequest, CreateCustomerRequest, Customer, Envelope, InitializedTransaction,
    InitializeTransactionRequest, VerifiedTransaction,
};

/// Environment variable holding the secret key for [`PaystackClient::from_env`].
const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";

/// Paystack API client.
///
/// Holds the secret key and a pooled HTTP client. Immutable after
/// construction, so a single instance can be shared across tasks freely.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    http: Client,
    base_url: String,
    secret_key: String,
}

impl PaystackClient {
    /// Paystack API base URL.
    const BASE_URL: &'static str = "https://api.paystack.co";

    /// Create a new Paystack client against the production API.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - Paystack secret key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Panics
    ///
    /// Panics if `secret_key` is empty. A missing credential is a
    /// configuration fault, not a recoverable error: no call can succeed
    /// without it.
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_options(Self::BASE_URL, secret_key, ClientOptions::default())
    }

    /// Create a client reading the secret key from `PAYSTACK_SECRET_KEY`.
    ///
    /// # Panics
    ///
    /// Panics if the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .unwrap_or_else(|_| panic!("{SECRET_KEY_ENV} env var not set"));
        Self::new(secret_key)
    }

    /// Create a client with a custom base URL and options.
    ///
    /// Useful for pointing at a stub server in tests.
    ///
    /// # Panics
    ///
    /// Panics if `secret_key` is empty, or if the HTTP client cannot be
    /// built (should not happen with default settings).
    #[must_use]
    pub fn with_options(
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        let secret_key = secret_key.into();
        assert!(!secret_key.is_empty(), "Paystack secret key must not be empty");

        let http = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    /// Check that the secret key is accepted by Paystack.
    ///
    /// Issues a GET to the customer listing endpoint; a 200 means the key
    /// is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Paystack rejects the key.
    pub async fn validate_credentials(&self) -> Result<(), PaystackError> {
        tracing::debug!("Validating Paystack credentials");

        self.dispatch(Method::GET, "/customer", Option::<&()>::None)
            .await
            .map(|_| ())
    }

    /// Create a customer with the given email.
    ///
    /// The email is not validated locally; Paystack is the authority.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Paystack rejects it.
    pub async fn create_customer(&self, email: &str) -> Result<Customer, PaystackError> {
        tracing::debug!(email = %email, "Creating Paystack customer");

        let request = CreateCustomerRequest { email };
        self.fetch(Method::POST, "/customer", Some(&request)).await
    }

    /// Initialize a transaction for the customer with the given email.
    ///
    /// `amount` is in the smallest currency unit (e.g. kobo or cents) and
    /// is sent as a decimal string per Paystack's convention. No rounding,
    /// currency logic, or range checks are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Paystack rejects it.
    pub async fn initialize_transaction(
        &self,
        email: &str,
        amount: i64,
    ) -> Result<InitializedTransaction, PaystackError> {
        tracing::debug!(email = %email, amount = %amount, "Initializing Paystack transaction");

        let request = InitializeTransactionRequest {
            email,
            amount: amount.to_string(),
        };
        self.fetch(Method::POST, "/transaction/initialize", Some(&request))
            .await
    }

    /// Charge a customer using a previously captured authorization code.
    ///
    /// Same amount convention as [`Self::initialize_transaction`]. The
    /// authorization code is passed through unchecked; Paystack decides
    /// whether it is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Paystack rejects it.
    pub async fn charge_authorization(
        &self,
        email: &str,
        amount: i64,
        authorization_code: &str,
    ) -> Result<InitializedTransaction, PaystackError> {
        tracing::debug!(email = %email, amount = %amount, "Charging Paystack authorization");

        let request = ChargeAuthorizationRequest {
            email,
            amount: amount.to_string(),
            authorization_code,
        };
        self.fetch(Method::POST, "/transaction/charge_authorization", Some(&request))
            .await
    }

    /// Look up a transaction by reference.
    ///
    /// The reference is embedded in the URL path with no escaping, so the
    /// caller must ensure it contains no characters requiring it. The
    /// returned status is verbatim from Paystack ("success", "failed", or
    /// anything else meaning pending); interpretation is the caller's.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Paystack rejects it.
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<VerifiedTransaction, PaystackError> {
        tracing::debug!(reference = %reference, "Verifying Paystack transaction");

        let path = format!("/transaction/verify/{reference}");
        self.fetch(Method::GET, &path, Option::<&()>::None).await
    }

    /// Execute one authenticated round trip and return the raw body text.
    ///
    /// The body is encoded up front so encode failures surface as
    /// [`PaystackError::Serialize`] rather than a transport error. Any
    /// status other than exactly 200 is a rejection carrying the raw body;
    /// Paystack documents 200 for every success here, so even 201 is
    /// treated as an error.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, PaystackError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.secret_key));

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(PaystackError::Serialize)?;
            request = request.header("Content-Type", "application/json").body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();

        // Bodies are small JSON documents; read them whole. Consuming the
        // response also returns the connection to reqwest's pool on every
        // exit path.
        let text = response.text().await?;

        if status != StatusCode::OK {
            return Err(PaystackError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    /// Dispatch, then decode the `data` envelope into the expected shape.
    ///
    /// A 200 with an empty or malformed body is a decode error, never
    /// silently ignored.
    async fn fetch<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, PaystackError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.dispatch(method, path, body).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(PaystackError::Decode)?;
        Ok(envelope.data)
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = PaystackClient::new("sk_test_xxx");
        assert_eq!(client.base_url, "https://api.paystack.co");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client =
            PaystackClient::with_options("http://localhost:8080/", "sk_test_xxx", ClientOptions::default());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    #[should_panic(expected = "secret key must not be empty")]
    fn empty_secret_panics() {
        let _ = PaystackClient::new("");
    }

    #[test]
    fn custom_timeout() {
        let options = ClientOptions { timeout_seconds: 5 };
        let _ = PaystackClient::with_options("http://localhost:8080", "sk_test_xxx", options);
    }
}
