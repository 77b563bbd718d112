use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "connection_requests")]
pub struct Model {
    #[sea_orm(indexed)]
    pub person_id: Uuid,
    pub comments: Option<String>,
    pub state: String,
    #[sea_orm(indexed)]
    pub assigned_group_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
