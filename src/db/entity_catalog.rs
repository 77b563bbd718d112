use std::fmt;

/// Every entity type the schema knows about, in one place. Guard tables,
/// blocking-reference messages, and admin routes all key off this enum, so a
/// new entity gets wired in here first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Attendance,
    Communication,
    ConnectionActivityType,
    ConnectionRequest,
    ConnectionRequestActivity,
    Group,
    GroupHistorical,
    Person,
    Registration,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Attendance,
        EntityKind::Communication,
        EntityKind::ConnectionActivityType,
        EntityKind::ConnectionRequest,
        EntityKind::ConnectionRequestActivity,
        EntityKind::Group,
        EntityKind::GroupHistorical,
        EntityKind::Person,
        EntityKind::Registration,
    ];

    /// Human-readable type name, used verbatim in blocking-reference messages.
    pub fn friendly_name(self) -> &'static str {
        match self {
            EntityKind::Attendance => "Attendance",
            EntityKind::Communication => "Communication",
            EntityKind::ConnectionActivityType => "Connection Activity Type",
            EntityKind::ConnectionRequest => "Connection Request",
            EntityKind::ConnectionRequestActivity => "Connection Request Activity",
            EntityKind::Group => "Group",
            EntityKind::GroupHistorical => "Group Historical",
            EntityKind::Person => "Person",
            EntityKind::Registration => "Registration",
        }
    }

    /// Pluralized, lower-cased descriptor for parent-of-child messages
    /// ("contains one or more child groups"). Irregular plurals are spelled
    /// out rather than derived.
    pub fn plural_lower(self) -> &'static str {
        match self {
            EntityKind::Attendance => "attendances",
            EntityKind::Communication => "communications",
            EntityKind::ConnectionActivityType => "connection activity types",
            EntityKind::ConnectionRequest => "connection requests",
            EntityKind::ConnectionRequestActivity => "connection request activities",
            EntityKind::Group => "groups",
            EntityKind::GroupHistorical => "group historicals",
            EntityKind::Person => "people",
            EntityKind::Registration => "registrations",
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Attendance => "attendances",
            EntityKind::Communication => "communications",
            EntityKind::ConnectionActivityType => "connection_activity_types",
            EntityKind::ConnectionRequest => "connection_requests",
            EntityKind::ConnectionRequestActivity => "connection_request_activities",
            EntityKind::Group => "groups",
            EntityKind::GroupHistorical => "group_historicals",
            EntityKind::Person => "people",
            EntityKind::Registration => "registrations",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn friendly_names_are_unique() {
        for (i, a) in EntityKind::ALL.iter().enumerate() {
            for b in &EntityKind::ALL[i + 1..] {
                assert_ne!(a.friendly_name(), b.friendly_name());
                assert_ne!(a.table_name(), b.table_name());
            }
        }
    }

    #[test]
    fn person_pluralizes_irregularly() {
        assert_eq!(EntityKind::Person.plural_lower(), "people");
        assert_eq!(EntityKind::Group.plural_lower(), "groups");
    }
}
