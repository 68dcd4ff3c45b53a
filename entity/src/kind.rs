//! Entity kinds held by the record store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten record kinds of the staffing graph.
///
/// The declaration order is a valid generation order: every kind only
/// references kinds declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Sessions,
    PositionTemplates,
    Instructors,
    Positions,
    Applicants,
    Applications,
    Preferences,
    Assignments,
    WageChunks,
    ReportingTags,
}

impl EntityKind {
    /// All kinds in generation order.
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Sessions,
        EntityKind::PositionTemplates,
        EntityKind::Instructors,
        EntityKind::Positions,
        EntityKind::Applicants,
        EntityKind::Applications,
        EntityKind::Preferences,
        EntityKind::Assignments,
        EntityKind::WageChunks,
        EntityKind::ReportingTags,
    ];

    /// Snake-case collection name, e.g. `"wage_chunks"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sessions => "sessions",
            Self::PositionTemplates => "position_templates",
            Self::Instructors => "instructors",
            Self::Positions => "positions",
            Self::Applicants => "applicants",
            Self::Applications => "applications",
            Self::Preferences => "preferences",
            Self::Assignments => "assignments",
            Self::WageChunks => "wage_chunks",
            Self::ReportingTags => "reporting_tags",
        }
    }

    /// Resolves a collection name to its kind.
    ///
    /// Returns `None` for names that are not one of the ten collections; callers
    /// dispatching on user-supplied names treat that as "nothing to generate".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Kinds whose sequences a record of this kind reads while being built.
    pub fn producers(&self) -> &'static [EntityKind] {
        match self {
            Self::Sessions | Self::Instructors | Self::Applicants => &[],
            Self::PositionTemplates => &[Self::Sessions],
            Self::Positions => &[Self::Sessions, Self::PositionTemplates, Self::Instructors],
            Self::Applications => &[Self::Sessions, Self::Applicants],
            Self::Preferences => &[Self::Applications, Self::Positions],
            Self::Assignments => &[Self::Positions, Self::Applicants],
            Self::WageChunks => &[Self::Assignments, Self::Positions, Self::Sessions],
            Self::ReportingTags => &[Self::WageChunks, Self::Assignments, Self::Positions],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_name() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_has_no_kind() {
        assert_eq!(EntityKind::from_name("position_preferences"), None);
        assert_eq!(EntityKind::from_name(""), None);
    }

    #[test]
    fn producers_precede_consumers_in_generation_order() {
        for kind in EntityKind::ALL {
            for producer in kind.producers() {
                assert!(producer < &kind, "{} must precede {}", producer, kind);
            }
        }
    }
}
