//! Schema-derived dependency references: for each entity type, the ordered
//! list of foreign-key columns elsewhere that may point at one of its rows.
//! The delete guard walks these tables; the order below is the order in which
//! a blocking reference is reported, so it is part of the contract.

use futures_util::future::BoxFuture;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::prelude::{
    Attendance, Communication, ConnectionRequest, ConnectionRequestActivity, Group,
    GroupHistorical, Person, Registration,
};
use super::entities::{
    attendance, communication, connection_request, connection_request_activity, group,
    group_historical, person, registration,
};
use super::entity_catalog::EntityKind;

/// Existence check against the backing store: does any row of the dependent
/// type reference the candidate id? Must short-circuit (`LIMIT 1`), never
/// count.
pub type ExistsProbe =
    for<'a> fn(&'a DatabaseConnection, Uuid) -> BoxFuture<'a, Result<bool, DbErr>>;

/// How the dependent row relates to the candidate, which controls the wording
/// of the blocking message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// The dependent row is assigned to / points at the candidate.
    Assigned,
    /// The candidate is the parent of the dependent row (child-collection
    /// wording, pluralized referencing type).
    ParentOf,
}

#[derive(Clone, Copy)]
pub struct DependencyRef {
    pub referencing: EntityKind,
    pub column: &'static str,
    pub kind: RefKind,
    pub probe: ExistsProbe,
}

impl DependencyRef {
    pub fn blocking_reason(&self, owner: EntityKind) -> String {
        match self.kind {
            RefKind::Assigned => format!(
                "This {} is assigned to a {}.",
                owner.friendly_name(),
                self.referencing.friendly_name()
            ),
            RefKind::ParentOf => format!(
                "This {} contains one or more child {}.",
                owner.friendly_name(),
                self.referencing.plural_lower()
            ),
        }
    }
}

/// The ordered dependency references for an entity type. Types nothing else
/// points at return an empty slice and are always deletable.
pub fn dependency_refs(kind: EntityKind) -> &'static [DependencyRef] {
    match kind {
        EntityKind::Group => &GROUP_REFS,
        EntityKind::Person => &PERSON_REFS,
        EntityKind::ConnectionActivityType => &CONNECTION_ACTIVITY_TYPE_REFS,
        _ => &[],
    }
}

static GROUP_REFS: [DependencyRef; 9] = [
    DependencyRef {
        referencing: EntityKind::Attendance,
        column: "search_result_group_id",
        kind: RefKind::Assigned,
        probe: attendance_search_result_group,
    },
    DependencyRef {
        referencing: EntityKind::Communication,
        column: "list_group_id",
        kind: RefKind::Assigned,
        probe: communication_list_group,
    },
    DependencyRef {
        referencing: EntityKind::ConnectionRequest,
        column: "assigned_group_id",
        kind: RefKind::Assigned,
        probe: connection_request_assigned_group,
    },
    DependencyRef {
        referencing: EntityKind::Group,
        column: "parent_group_id",
        kind: RefKind::ParentOf,
        probe: group_parent_group,
    },
    DependencyRef {
        referencing: EntityKind::GroupHistorical,
        column: "group_id",
        kind: RefKind::Assigned,
        probe: group_historical_group,
    },
    DependencyRef {
        referencing: EntityKind::GroupHistorical,
        column: "parent_group_id",
        kind: RefKind::ParentOf,
        probe: group_historical_parent_group,
    },
    DependencyRef {
        referencing: EntityKind::Person,
        column: "giving_group_id",
        kind: RefKind::Assigned,
        probe: person_giving_group,
    },
    DependencyRef {
        referencing: EntityKind::Person,
        column: "primary_family_id",
        kind: RefKind::Assigned,
        probe: person_primary_family,
    },
    DependencyRef {
        referencing: EntityKind::Registration,
        column: "group_id",
        kind: RefKind::Assigned,
        probe: registration_group,
    },
];

static PERSON_REFS: [DependencyRef; 2] = [
    DependencyRef {
        referencing: EntityKind::Attendance,
        column: "person_id",
        kind: RefKind::Assigned,
        probe: attendance_person,
    },
    DependencyRef {
        referencing: EntityKind::ConnectionRequest,
        column: "person_id",
        kind: RefKind::Assigned,
        probe: connection_request_person,
    },
];

static CONNECTION_ACTIVITY_TYPE_REFS: [DependencyRef; 1] = [DependencyRef {
    referencing: EntityKind::ConnectionRequestActivity,
    column: "connection_activity_type_id",
    kind: RefKind::Assigned,
    probe: connection_request_activity_activity_type,
}];

async fn exists_where<E>(
    db: &DatabaseConnection,
    column: E::Column,
    id: Uuid,
) -> Result<bool, DbErr>
where
    E: EntityTrait,
{
    // `one` applies LIMIT 1, so the store stops at the first match.
    Ok(E::find().filter(column.eq(id)).one(db).await?.is_some())
}

fn attendance_search_result_group(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Attendance>(
        db,
        attendance::Column::SearchResultGroupId,
        id,
    ))
}

fn attendance_person(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Attendance>(
        db,
        attendance::Column::PersonId,
        id,
    ))
}

fn communication_list_group(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Communication>(
        db,
        communication::Column::ListGroupId,
        id,
    ))
}

fn connection_request_assigned_group(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<ConnectionRequest>(
        db,
        connection_request::Column::AssignedGroupId,
        id,
    ))
}

fn connection_request_person(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<ConnectionRequest>(
        db,
        connection_request::Column::PersonId,
        id,
    ))
}

fn group_parent_group(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Group>(db, group::Column::ParentGroupId, id))
}

fn group_historical_group(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<GroupHistorical>(
        db,
        group_historical::Column::GroupId,
        id,
    ))
}

fn group_historical_parent_group(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<GroupHistorical>(
        db,
        group_historical::Column::ParentGroupId,
        id,
    ))
}

fn person_giving_group(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Person>(db, person::Column::GivingGroupId, id))
}

fn person_primary_family(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Person>(
        db,
        person::Column::PrimaryFamilyId,
        id,
    ))
}

fn registration_group(db: &DatabaseConnection, id: Uuid) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<Registration>(
        db,
        registration::Column::GroupId,
        id,
    ))
}

fn connection_request_activity_activity_type(
    db: &DatabaseConnection,
    id: Uuid,
) -> BoxFuture<'_, Result<bool, DbErr>> {
    Box::pin(exists_where::<ConnectionRequestActivity>(
        db,
        connection_request_activity::Column::ConnectionActivityTypeId,
        id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_refs_keep_declared_order() {
        let columns: Vec<(EntityKind, &str)> = dependency_refs(EntityKind::Group)
            .iter()
            .map(|dep| (dep.referencing, dep.column))
            .collect();
        assert_eq!(
            columns,
            vec![
                (EntityKind::Attendance, "search_result_group_id"),
                (EntityKind::Communication, "list_group_id"),
                (EntityKind::ConnectionRequest, "assigned_group_id"),
                (EntityKind::Group, "parent_group_id"),
                (EntityKind::GroupHistorical, "group_id"),
                (EntityKind::GroupHistorical, "parent_group_id"),
                (EntityKind::Person, "giving_group_id"),
                (EntityKind::Person, "primary_family_id"),
                (EntityKind::Registration, "group_id"),
            ]
        );
    }

    #[test]
    fn no_duplicate_references_within_a_table() {
        for kind in EntityKind::ALL {
            let refs = dependency_refs(kind);
            for (i, a) in refs.iter().enumerate() {
                for b in &refs[i + 1..] {
                    assert!(
                        !(a.referencing == b.referencing && a.column == b.column),
                        "{kind} declares ({}, {}) twice",
                        a.referencing,
                        a.column
                    );
                }
            }
        }
    }

    #[test]
    fn self_reference_uses_parent_of_wording() {
        let dep = &dependency_refs(EntityKind::Group)[3];
        assert_eq!(dep.referencing, EntityKind::Group);
        assert_eq!(dep.kind, RefKind::ParentOf);
        assert_eq!(
            dep.blocking_reason(EntityKind::Group),
            "This Group contains one or more child groups."
        );
    }

    #[test]
    fn assigned_wording_names_both_types() {
        let dep = &dependency_refs(EntityKind::ConnectionActivityType)[0];
        assert_eq!(
            dep.blocking_reason(EntityKind::ConnectionActivityType),
            "This Connection Activity Type is assigned to a Connection Request Activity."
        );
    }
}
