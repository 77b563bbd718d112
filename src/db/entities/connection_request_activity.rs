use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "connection_request_activities")]
pub struct Model {
    #[sea_orm(indexed)]
    pub connection_request_id: Uuid,
    #[sea_orm(indexed)]
    pub connection_activity_type_id: Uuid,
    pub note: Option<String>,
    #[sea_orm(
        belongs_to,
        from = "connection_activity_type_id",
        to = "id",
        on_delete = "Restrict"
    )]
    pub activity_type: HasOne<super::connection_activity_type::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
