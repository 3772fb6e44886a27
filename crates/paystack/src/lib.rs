//! Paystack API client.
//!
//! This crate provides a thin client for the Paystack payments API:
//! customer creation, transaction initialization, charging a stored
//! authorization, transaction verification, and credential validation.
//! Every operation is a single authenticated round trip; there is no
//! retry policy, caching, or webhook handling.
//!
//! # Example
//!
//! ```no_run
//! use paystack::PaystackClient;
//!
//! # async fn example() -> Result<(), paystack::PaystackError> {
//! let client = PaystackClient::new("sk_test_xxx");
//!
//! // Initialize a transaction. Amount is in the smallest currency
//! // unit (kobo/cents), never a fractional value.
//! let txn = client.initialize_transaction("customer@example.com", 250_000).await?;
//! println!("Redirect the customer to: {}", txn.authorization_url);
//!
//! // Later, verify it by reference.
//! let verified = client.verify_transaction(&txn.reference).await?;
//! println!("Status: {}", verified.status);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, PaystackClient};
pub use error::PaystackError;
pub use types::*;
