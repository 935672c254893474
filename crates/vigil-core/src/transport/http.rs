//! HTTP implementation of the status transport.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use vigil_protocol::StatusResponse;

use super::StatusTransport;
use super::errors::TransportError;

/// Fetches status snapshots over HTTP with `reqwest`.
///
/// The client is configured without a request timeout on purpose: the
/// poll loop has no cancellation, and a hung request must keep the
/// session's single-flight guard held rather than spawn a competitor.
#[derive(Debug, Clone, Default)]
pub struct HttpStatusTransport {
    client: Client,
}

impl HttpStatusTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use an externally configured client (cookies, proxies, headers).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl StatusTransport for HttpStatusTransport {
    async fn fetch(
        &self,
        endpoint_url: &str,
        show_all: bool,
    ) -> Result<StatusResponse, TransportError> {
        debug!(
            event = "core.transport.fetch_started",
            url = endpoint_url,
            show_all = show_all,
        );

        let response = self
            .client
            .get(endpoint_url)
            .query(&[("show_all", show_all)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.transport.fetch_rejected",
                url = endpoint_url,
                status = status.as_u16(),
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.json::<StatusResponse>().await?;
        debug!(event = "core.transport.fetch_completed", url = endpoint_url);
        Ok(body)
    }
}
