use serde::{Deserialize, Serialize};

/// Entity status as reported by the server.
///
/// The wire format is SCREAMING_SNAKE_CASE. Servers may report statuses
/// this client does not know about; those decode as [`EntityStatus::Unknown`]
/// so a dashboard running against a newer server keeps polling instead of
/// failing to decode.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Running,
    Stopped,
    Pending,
    Migrating,
    Suspended,
    Failed,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityStatus::Running => write!(f, "running"),
            EntityStatus::Stopped => write!(f, "stopped"),
            EntityStatus::Pending => write!(f, "pending"),
            EntityStatus::Migrating => write!(f, "migrating"),
            EntityStatus::Suspended => write!(f, "suspended"),
            EntityStatus::Failed => write!(f, "failed"),
            EntityStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Kind of managed entity a view polls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Machine,
    Node,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Machine => write!(f, "machine"),
            EntityKind::Node => write!(f, "node"),
        }
    }
}

/// Identifies the entity a poll session is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn machine(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Machine, id)
    }

    pub fn node(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Node, id)
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EntityStatus::Running).unwrap(),
            r#""RUNNING""#
        );
        assert_eq!(
            serde_json::to_string(&EntityStatus::Migrating).unwrap(),
            r#""MIGRATING""#
        );
    }

    #[test]
    fn test_entity_status_roundtrip() {
        for status in [
            EntityStatus::Running,
            EntityStatus::Stopped,
            EntityStatus::Pending,
            EntityStatus::Migrating,
            EntityStatus::Suspended,
            EntityStatus::Failed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: EntityStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unrecognized_status_decodes_as_unknown() {
        let parsed: EntityStatus = serde_json::from_str(r#""DEFRAGMENTING""#).unwrap();
        assert_eq!(parsed, EntityStatus::Unknown);
    }

    #[test]
    fn test_entity_status_display() {
        assert_eq!(EntityStatus::Running.to_string(), "running");
        assert_eq!(EntityStatus::Stopped.to_string(), "stopped");
        assert_eq!(EntityStatus::Migrating.to_string(), "migrating");
    }

    #[test]
    fn test_entity_ref_display() {
        assert_eq!(EntityRef::machine("42").to_string(), "machine/42");
        assert_eq!(EntityRef::node("rack-7").to_string(), "node/rack-7");
    }

    #[test]
    fn test_entity_ref_serde_roundtrip() {
        let entity = EntityRef::machine("web-01");
        let json = serde_json::to_string(&entity).unwrap();
        let parsed: EntityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entity);
    }
}
