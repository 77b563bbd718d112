//! Copy helpers for entity records. A copy is always a new, unattached
//! instance; nothing here talks to the store.

use crate::db::entities::{
    attendance, communication, connection_activity_type, connection_request,
    connection_request_activity, group, group_historical, person, registration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDepth {
    /// Every persisted field copied by value: scalars, foreign keys, the
    /// identifier and the audit columns, verbatim. Callers that want a fresh
    /// row clear the identifier and audit fields themselves; the helper does
    /// not guess that intent.
    Shallow,
    /// Structural copy that also duplicates owned child collections. Record
    /// types here own no child collections, so this falls through to the
    /// shallow copy until an entity overrides `deep_copy`.
    Deep,
}

pub trait RecordCopy: Clone {
    fn copy_record(&self, depth: CopyDepth) -> Self {
        match depth {
            CopyDepth::Shallow => self.clone(),
            CopyDepth::Deep => self.deep_copy(),
        }
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

// The derived `Clone` covers the complete persisted field set of each model
// by construction; a schema change can never leave a field behind.
impl RecordCopy for attendance::Model {}
impl RecordCopy for communication::Model {}
impl RecordCopy for connection_activity_type::Model {}
impl RecordCopy for connection_request::Model {}
impl RecordCopy for connection_request_activity::Model {}
impl RecordCopy for group::Model {}
impl RecordCopy for group_historical::Model {}
impl RecordCopy for person::Model {}
impl RecordCopy for registration::Model {}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{CopyDepth, RecordCopy};
    use crate::test_helpers::{group_row, ts};

    #[test]
    fn shallow_copy_carries_every_field_verbatim() {
        let mut source = group_row(Uuid::new_v4(), "Ushers");
        source.description = Some("Sunday morning team".to_string());
        source.is_public = true;
        source.is_archived = true;
        source.archived_at = Some(ts());
        source.parent_group_id = Some(Uuid::new_v4());
        source.created_by_id = Some(Uuid::new_v4());
        source.modified_by_id = Some(Uuid::new_v4());

        let copy = source.copy_record(CopyDepth::Shallow);

        assert_eq!(copy.id, source.id);
        assert_eq!(copy.name, source.name);
        assert_eq!(copy.description, source.description);
        assert_eq!(copy.is_active, source.is_active);
        assert_eq!(copy.is_public, source.is_public);
        assert_eq!(copy.is_archived, source.is_archived);
        assert_eq!(copy.archived_at, source.archived_at);
        assert_eq!(copy.parent_group_id, source.parent_group_id);
        assert_eq!(copy.created_at, source.created_at);
        assert_eq!(copy.updated_at, source.updated_at);
        assert_eq!(copy.created_by_id, source.created_by_id);
        assert_eq!(copy.modified_by_id, source.modified_by_id);
    }

    #[test]
    fn copy_is_a_distinct_instance() {
        let source = group_row(Uuid::new_v4(), "Greeters");
        let original_name = source.name.clone();

        let mut copy = source.copy_record(CopyDepth::Shallow);
        copy.name = "Renamed".to_string();
        copy.parent_group_id = Some(Uuid::new_v4());

        assert_eq!(source.name, original_name);
        assert_eq!(source.parent_group_id, None);
    }

    #[test]
    fn deep_copy_matches_shallow_for_collectionless_records() {
        let source = group_row(Uuid::new_v4(), "Band");
        assert_eq!(
            source.copy_record(CopyDepth::Deep),
            source.copy_record(CopyDepth::Shallow)
        );
    }
}
