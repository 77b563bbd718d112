use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "connection_activity_types")]
pub struct Model {
    pub name: String,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    pub connection_type_id: Option<Uuid>,
    #[sea_orm(has_many)]
    pub activities: HasMany<super::connection_request_activity::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
