//! Client error types.

/// Errors that can occur when calling the Paystack API.
#[derive(Debug, thiserror::Error)]
pub enum PaystackError {
    /// Request body could not be encoded to JSON. This indicates a
    /// programming defect, not a runtime condition.
    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request with a non-200 status. The display
    /// message is the raw response body, verbatim; Paystack's error JSON
    /// is not parsed further.
    #[error("{body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A 200 response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_raw_body() {
        let err = PaystackError::Api {
            status: 401,
            body: r#"{"message":"invalid key"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"{"message":"invalid key"}"#);
    }
}
