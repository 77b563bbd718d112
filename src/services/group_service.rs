use uuid::Uuid;

use crate::{
    db::dao::{DaoBase, GroupDao},
    db::entities::group,
    db::entity_catalog::EntityKind,
    error::AppError,
    services::delete_guard::{Deletability, DeleteGuardService},
};

#[derive(Clone)]
pub struct GroupService {
    dao: GroupDao,
    guard: DeleteGuardService,
}

impl GroupService {
    pub fn new(dao: GroupDao, guard: DeleteGuardService) -> Self {
        Self { dao, guard }
    }

    pub async fn create_group(
        &self,
        name: &str,
        description: Option<&str>,
        parent_group_id: Option<Uuid>,
        actor: Option<Uuid>,
    ) -> Result<group::Model, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Group name is required"));
        }
        Ok(self
            .dao
            .create_group(name, description, parent_group_id, actor)
            .await?)
    }

    pub async fn list_groups(&self, page: u64, page_size: u64) -> Result<Vec<group::Model>, AppError> {
        Ok(self.dao.list_groups(page, page_size).await?)
    }

    pub async fn require_group(&self, id: &Uuid) -> Result<group::Model, AppError> {
        Ok(self.dao.find_by_id(*id).await?)
    }

    pub async fn can_delete(&self, id: &Uuid) -> Result<Deletability, AppError> {
        self.guard.can_delete(EntityKind::Group, *id).await
    }

    /// Guarded delete: refuses with the first blocking reference's reason
    /// before touching the row.
    pub async fn delete_group(&self, id: &Uuid) -> Result<(), AppError> {
        match self.can_delete(id).await? {
            Deletability::Deletable => {}
            Deletability::Blocked { reason } => return Err(AppError::conflict(reason)),
        }
        self.dao.delete(*id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::GroupService;
    use crate::db::dao::{DaoBase, GroupDao};
    use crate::db::entities::{
        attendance, communication, connection_request, group, group_historical, person,
        registration,
    };
    use crate::error::AppError;
    use crate::services::delete_guard::DeleteGuardService;
    use crate::test_helpers::{attendance_referencing_group, empty};

    fn service(db: &sea_orm::DatabaseConnection) -> GroupService {
        GroupService::new(GroupDao::new(db), DeleteGuardService::new(db))
    }

    #[tokio::test]
    async fn delete_refuses_while_references_exist() {
        let group_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[attendance_referencing_group(group_id)]])
            .into_connection();

        let err = service(&db)
            .delete_group(&group_id)
            .await
            .expect_err("delete should be blocked");
        match err {
            AppError::Conflict(reason) => {
                assert_eq!(reason, "This Group is assigned to a Attendance.");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_proceeds_when_guard_clears() {
        let group_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([empty::<attendance::Model>()])
            .append_query_results([empty::<communication::Model>()])
            .append_query_results([empty::<connection_request::Model>()])
            .append_query_results([empty::<group::Model>()])
            .append_query_results([empty::<group_historical::Model>()])
            .append_query_results([empty::<group_historical::Model>()])
            .append_query_results([empty::<person::Model>()])
            .append_query_results([empty::<person::Model>()])
            .append_query_results([empty::<registration::Model>()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        service(&db)
            .delete_group(&group_id)
            .await
            .expect("delete should succeed");
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(&db)
            .create_group("   ", None, None, None)
            .await
            .expect_err("blank name should be rejected");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
