use serde::{Deserialize, Serialize};

use crate::types::EntityStatus;

/// Response body of `GET <entity-status-url>?show_all=<bool>`.
///
/// The rendered fragments (`activities`, `ops`, `disk_ops`) are opaque to
/// the poller core: it fingerprints `activities` as a whole and passes the
/// rest through to the view untouched. `ops` and `disk_ops` are only
/// present for views that render them.
///
/// `is_new_state` is the server's "a state transition is in flight" flag;
/// while it is true the status icon stays on the spinner regardless of
/// what `icon` says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub activities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ops: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_ops: Option<String>,
    pub is_new_state: bool,
    pub icon: String,
    pub status: EntityStatus,
    pub human_readable_status: String,
    #[serde(default)]
    pub connect_uri: Option<String>,
}
