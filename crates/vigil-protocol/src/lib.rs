//! # vigil-protocol
//!
//! Wire types for the dashboard's entity status endpoint.
//!
//! This crate owns the JSON shapes exchanged between the poller core and
//! the server, plus the shared domain enums (entity kind and status). It
//! contains no polling logic; that lives in `vigil-core`.

mod messages;
mod types;

pub use messages::StatusResponse;
pub use types::{EntityKind, EntityRef, EntityStatus};
