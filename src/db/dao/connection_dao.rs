use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{connection_activity_type, connection_request_activity};

/// DAO over the connection-activity pair: activity types and the per-request
/// activity rows that reference them.
#[derive(Clone)]
pub struct ConnectionDao {
    db: DatabaseConnection,
}

impl DaoBase for ConnectionDao {
    type Entity = crate::db::entities::prelude::ConnectionActivityType;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[derive(Clone)]
struct ActivityDao {
    db: DatabaseConnection,
}

impl DaoBase for ActivityDao {
    type Entity = crate::db::entities::prelude::ConnectionRequestActivity;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ConnectionDao {
    fn activity_dao(&self) -> ActivityDao {
        ActivityDao::new(&self.db)
    }

    pub async fn create_activity_type(
        &self,
        name: &str,
        actor: Option<Uuid>,
    ) -> DaoResult<connection_activity_type::Model> {
        let model = connection_activity_type::ActiveModel {
            name: Set(name.to_string()),
            is_active: Set(true),
            connection_type_id: Set(None),
            ..Default::default()
        };
        self.create_by(model, actor).await
    }

    pub async fn list_activity_types(
        &self,
    ) -> DaoResult<Vec<connection_activity_type::Model>> {
        self.find(1, Self::MAX_PAGE_SIZE, |query| {
            query.order_by_asc(connection_activity_type::Column::Name)
        })
        .await
    }

    pub async fn record_activity(
        &self,
        request_id: &Uuid,
        activity_type_id: &Uuid,
        note: Option<&str>,
        actor: Option<Uuid>,
    ) -> DaoResult<connection_request_activity::Model> {
        let model = connection_request_activity::ActiveModel {
            connection_request_id: Set(*request_id),
            connection_activity_type_id: Set(*activity_type_id),
            note: Set(note.map(str::to_string)),
            ..Default::default()
        };
        self.activity_dao().create_by(model, actor).await
    }

    pub async fn list_activities_for_request(
        &self,
        request_id: &Uuid,
    ) -> DaoResult<Vec<connection_request_activity::Model>> {
        self.activity_dao()
            .find(1, ActivityDao::MAX_PAGE_SIZE, |query| {
                query.filter(
                    connection_request_activity::Column::ConnectionRequestId.eq(*request_id),
                )
            })
            .await
    }
}
