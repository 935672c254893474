//! Fetching status snapshots from the entity status endpoint.
//!
//! The engine talks to the endpoint through [`StatusTransport`];
//! [`HttpStatusTransport`] is the production implementation. The contract
//! has no request timeout, no retry, and no cancellation primitive. A hung
//! request keeps the session in flight (and new activations refused) until
//! it resolves or errors.

pub mod errors;
pub mod http;

pub use errors::TransportError;
pub use http::HttpStatusTransport;

use async_trait::async_trait;
use vigil_protocol::StatusResponse;

/// One poll request against an entity's status endpoint.
///
/// Futures need not be `Send`; the poll loop is single-threaded
/// cooperative scheduling.
#[async_trait(?Send)]
pub trait StatusTransport {
    /// `GET <endpoint_url>?show_all=<bool>`, decoded from JSON.
    ///
    /// Any network failure, non-2xx status, or undecodable body is a
    /// [`TransportError`]; the session aborts silently on all of them.
    async fn fetch(
        &self,
        endpoint_url: &str,
        show_all: bool,
    ) -> Result<StatusResponse, TransportError>;
}
