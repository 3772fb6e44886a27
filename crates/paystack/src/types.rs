//! Request and response types for the Paystack API.
//!
//! Every response type is a snapshot of remote state at call time; the
//! client never mutates or caches these.

use serde::{Deserialize, Serialize};

/// Paystack wraps every successful payload in a top-level `data` field.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    /// The actual payload.
    pub data: T,
}

/// A customer record created by Paystack.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Paystack-assigned customer ID.
    pub id: i64,
    /// Customer email.
    pub email: String,
    /// Paystack customer code (e.g., `CUS_xyz`).
    pub customer_code: String,
}

/// The result of initializing a transaction or charging an authorization.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializedTransaction {
    /// Transaction reference, used later for verification.
    pub reference: String,
    /// URL the customer should be redirected to for checkout.
    pub authorization_url: String,
    /// Access code for the transaction.
    pub access_code: String,
}

/// Card or bank metadata attached to a verified transaction.
///
/// Paystack omits or nulls some of these fields depending on the payment
/// channel, so absent fields decode to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Authorization {
    /// Opaque code representing the captured payment instrument,
    /// reusable for future charges.
    pub authorization_code: String,
    /// First six digits of the card.
    pub bin: String,
    /// Last four digits of the card.
    pub last4: String,
    /// Card expiry month.
    pub exp_month: String,
    /// Card expiry year.
    pub exp_year: String,
    /// Payment channel (e.g., "card", "bank").
    pub channel: String,
    /// Card type (e.g., "visa").
    pub card_type: String,
    /// Issuing bank.
    pub bank: String,
    /// Two-letter country code of the issuer.
    pub country_code: String,
    /// Card brand.
    pub brand: String,
    /// Whether the authorization can be reused for charges.
    pub reusable: bool,
    /// Paystack signature for the instrument.
    pub signature: String,
    /// Account holder name, when the channel provides one.
    pub account_name: Option<String>,
}

/// A transaction looked up by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedTransaction {
    /// Paystack-assigned transaction ID.
    pub id: i64,
    /// Transaction reference.
    pub reference: String,
    /// Transaction status, verbatim from Paystack: "success", "failed",
    /// or anything else meaning the transaction is still pending. The
    /// client assigns no meaning to any value.
    pub status: String,
    /// Payment instrument metadata, when the transaction carries one.
    pub authorization: Option<Authorization>,
}

/// Body for `POST /customer`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateCustomerRequest<'a> {
    /// Customer email. Not validated locally; Paystack is the authority.
    pub email: &'a str,
}

/// Body for `POST /transaction/initialize`.
///
/// `amount` is the decimal string rendering of the smallest-unit integer,
/// per Paystack's documented convention. It is never a JSON number.
#[derive(Debug, Serialize)]
pub(crate) struct InitializeTransactionRequest<'a> {
    /// Customer email.
    pub email: &'a str,
    /// Amount in the smallest currency unit, as a decimal string.
    pub amount: String,
}

/// Body for `POST /transaction/charge_authorization`.
#[derive(Debug, Serialize)]
pub(crate) struct ChargeAuthorizationRequest<'a> {
    /// Customer email.
    pub email: &'a str,
    /// Amount in the smallest currency unit, as a decimal string.
    pub amount: String,
    /// Previously captured authorization code. Passed through unchecked;
    /// Paystack decides whether it is still valid.
    pub authorization_code: &'a str,
}
