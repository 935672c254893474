//! Per-view configuration of the shared poll engine.
//!
//! The dashboard used to carry three near-identical copies of the poll
//! loop (machine detail, node detail, list). The engine is shared; what
//! differs per view is declared here: which auxiliary fragments the view
//! renders, whether migrating entities get their own icon treatment, and
//! whether the first-boot hint applies.

/// Which auxiliary fragments and affordances a view consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProfile {
    /// Name used in log events ("machine_detail", "node_detail", "list").
    pub name: &'static str,
    /// View renders the operation-button list fragment.
    pub ops_fragment: bool,
    /// View renders the per-disk operation list fragment.
    pub disk_ops_fragment: bool,
    /// Migrating entities get a distinct icon state (list views).
    pub migrating_badge: bool,
    /// View can reveal the one-time first-boot hint (machine detail).
    pub boot_hint: bool,
}

impl ViewProfile {
    /// Machine detail view: all fragments, boot hint, no migrating badge.
    pub fn machine_detail() -> Self {
        Self {
            name: "machine_detail",
            ops_fragment: true,
            disk_ops_fragment: true,
            migrating_badge: false,
            boot_hint: true,
        }
    }

    /// Node detail view: operations fragment only.
    pub fn node_detail() -> Self {
        Self {
            name: "node_detail",
            ops_fragment: true,
            disk_ops_fragment: false,
            migrating_badge: false,
            boot_hint: false,
        }
    }

    /// List view: no auxiliary fragments, migrating badge applies.
    pub fn list() -> Self {
        Self {
            name: "list",
            ops_fragment: false,
            disk_ops_fragment: false,
            migrating_badge: true,
            boot_hint: false,
        }
    }
}
