use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::group;

#[derive(Clone)]
pub struct GroupDao {
    db: DatabaseConnection,
}

impl DaoBase for GroupDao {
    type Entity = crate::db::entities::prelude::Group;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl GroupDao {
    pub async fn create_group(
        &self,
        name: &str,
        description: Option<&str>,
        parent_group_id: Option<Uuid>,
        actor: Option<Uuid>,
    ) -> DaoResult<group::Model> {
        let model = group::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
            is_active: Set(true),
            is_public: Set(false),
            is_archived: Set(false),
            archived_at: Set(None),
            parent_group_id: Set(parent_group_id),
            ..Default::default()
        };
        self.create_by(model, actor).await
    }

    pub async fn list_groups(&self, page: u64, page_size: u64) -> DaoResult<Vec<group::Model>> {
        self.find(page, page_size, |query| {
            query.order_by_asc(group::Column::Name)
        })
        .await
    }

    pub async fn list_children(&self, parent_id: &Uuid) -> DaoResult<Vec<group::Model>> {
        self.find(1, Self::MAX_PAGE_SIZE, |query| {
            query
                .filter(group::Column::ParentGroupId.eq(*parent_id))
                .order_by_asc(group::Column::Name)
        })
        .await
    }
}
