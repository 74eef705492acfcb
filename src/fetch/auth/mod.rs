//! Request authentication.
//!
//! [`ApiKey`] wraps any [`HttpClient`](super::HttpClient) and injects the
//! static key header the MTA real-time endpoints expect.

mod api_key;

pub use api_key::{API_KEY_HEADER, ApiKey};
