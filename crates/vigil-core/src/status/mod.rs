//! Reconciling server-reported entity status into UI affordances.
//!
//! A pure projection: given what the server said about the entity, which
//! operations are currently valid and what the status icon should show.
//! Applying the result to visible controls belongs to the view layer.

use vigil_protocol::{EntityStatus, StatusResponse};

use crate::profile::ViewProfile;

/// Entity status fields of one poll response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStatusReport {
    pub status: EntityStatus,
    pub is_transitioning: bool,
    pub icon: String,
    pub human_readable_status: String,
    pub connect_uri: Option<String>,
}

impl From<&StatusResponse> for EntityStatusReport {
    fn from(response: &StatusResponse) -> Self {
        Self {
            status: response.status,
            is_transitioning: response.is_new_state,
            icon: response.icon.clone(),
            human_readable_status: response.human_readable_status.clone(),
            connect_uri: response.connect_uri.clone(),
        }
    }
}

/// What the status icon should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconState {
    /// A transition is in flight; the icon spins regardless of the
    /// server-provided icon name until the transition flag clears.
    Spinning,
    /// Migrating entities get their own treatment in list views,
    /// driven by status alone.
    Migrating,
    /// Static icon named by the server.
    Static(String),
}

/// UI-affordance flags derived from one status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    pub console_available: bool,
    pub resource_edit_allowed: bool,
    pub screenshot_allowed: bool,
    pub connect_button_enabled: bool,
    pub status_icon: IconState,
    pub human_readable_status: String,
}

/// Derive affordances from a status report.
pub fn reconcile(report: &EntityStatusReport, profile: &ViewProfile) -> Affordances {
    let console_available = report.status == EntityStatus::Running;

    let status_icon = if profile.migrating_badge && report.status == EntityStatus::Migrating {
        IconState::Migrating
    } else if report.is_transitioning {
        IconState::Spinning
    } else {
        IconState::Static(report.icon.clone())
    };

    Affordances {
        console_available,
        resource_edit_allowed: matches!(
            report.status,
            EntityStatus::Stopped | EntityStatus::Pending
        ),
        screenshot_allowed: report.status == EntityStatus::Running,
        connect_button_enabled: console_available && report.connect_uri.is_some(),
        status_icon,
        human_readable_status: report.human_readable_status.clone(),
    }
}
