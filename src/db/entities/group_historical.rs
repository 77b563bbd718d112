use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

/// Point-in-time snapshot of a group, kept for history views after the live
/// row changes. Carries its own copy of the parent pointer.
#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "group_historicals")]
pub struct Model {
    #[sea_orm(indexed)]
    pub group_id: Uuid,
    #[sea_orm(indexed)]
    pub parent_group_id: Option<Uuid>,
    pub group_name: String,
    #[sea_orm(default_value = false)]
    pub is_archived: bool,
    pub effective_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}
