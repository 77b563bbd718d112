use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::dependency::dependency_refs;
use crate::db::entity_catalog::EntityKind;
use crate::error::AppError;

/// Verdict of a pre-delete referential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletability {
    Deletable,
    Blocked { reason: String },
}

impl Deletability {
    pub fn is_deletable(&self) -> bool {
        matches!(self, Deletability::Deletable)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Deletability::Deletable => None,
            Deletability::Blocked { reason } => Some(reason),
        }
    }
}

/// Advisory pre-delete check over the declared dependency-reference tables.
///
/// Walks the references in declared order and stops at the first row found,
/// so when several references would block, the surfaced reason is always the
/// first declared one. The check takes no lock and opens no transaction; the
/// store's own constraints remain the final authority under concurrent
/// writes.
#[derive(Clone)]
pub struct DeleteGuardService {
    db: DatabaseConnection,
}

impl DeleteGuardService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn can_delete(&self, kind: EntityKind, id: Uuid) -> Result<Deletability, AppError> {
        for dep in dependency_refs(kind) {
            let referenced = (dep.probe)(&self.db, id).await.map_err(|err| {
                tracing::warn!(
                    entity = %kind,
                    referencing = %dep.referencing,
                    column = dep.column,
                    error = %err,
                    "delete guard probe failed"
                );
                AppError::store_unavailable(format!(
                    "Unable to determine whether this {} can be deleted.",
                    kind.friendly_name()
                ))
            })?;

            if referenced {
                let reason = dep.blocking_reason(kind);
                tracing::debug!(entity = %kind, %id, reason, "delete blocked");
                return Ok(Deletability::Blocked { reason });
            }
        }

        Ok(Deletability::Deletable)
    }
}
