use uuid::Uuid;

use crate::{
    db::dao::{ConnectionDao, DaoBase},
    db::entities::{connection_activity_type, connection_request_activity},
    db::entity_catalog::EntityKind,
    error::AppError,
    services::delete_guard::{Deletability, DeleteGuardService},
};

#[derive(Clone)]
pub struct ConnectionService {
    dao: ConnectionDao,
    guard: DeleteGuardService,
}

impl ConnectionService {
    pub fn new(dao: ConnectionDao, guard: DeleteGuardService) -> Self {
        Self { dao, guard }
    }

    pub async fn create_activity_type(
        &self,
        name: &str,
        actor: Option<Uuid>,
    ) -> Result<connection_activity_type::Model, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Activity type name is required"));
        }
        Ok(self.dao.create_activity_type(name, actor).await?)
    }

    pub async fn list_activity_types(
        &self,
    ) -> Result<Vec<connection_activity_type::Model>, AppError> {
        Ok(self.dao.list_activity_types().await?)
    }

    pub async fn record_activity(
        &self,
        request_id: &Uuid,
        activity_type_id: &Uuid,
        note: Option<&str>,
        actor: Option<Uuid>,
    ) -> Result<connection_request_activity::Model, AppError> {
        Ok(self
            .dao
            .record_activity(request_id, activity_type_id, note, actor)
            .await?)
    }

    pub async fn can_delete_activity_type(&self, id: &Uuid) -> Result<Deletability, AppError> {
        self.guard
            .can_delete(EntityKind::ConnectionActivityType, *id)
            .await
    }

    pub async fn delete_activity_type(&self, id: &Uuid) -> Result<(), AppError> {
        match self.can_delete_activity_type(id).await? {
            Deletability::Deletable => {}
            Deletability::Blocked { reason } => return Err(AppError::conflict(reason)),
        }
        self.dao.delete(*id).await?;
        Ok(())
    }
}
