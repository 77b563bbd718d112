use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

/// A gathering of people: a family, a serving team, a small group. Groups
/// nest through `parent_group_id`, which is why a group with children cannot
/// simply be deleted.
#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(default_value = false)]
    pub is_public: bool,
    #[sea_orm(default_value = false)]
    pub is_archived: bool,
    pub archived_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(indexed)]
    pub parent_group_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
