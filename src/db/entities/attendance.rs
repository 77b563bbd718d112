use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

/// One person's attendance at one occurrence. `search_result_group_id` points
/// at the group a check-in search surfaced, so deleting such a group would
/// orphan the record.
#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(indexed)]
    pub person_id: Uuid,
    pub occurred_at: DateTimeWithTimeZone,
    #[sea_orm(default_value = false)]
    pub did_attend: bool,
    pub note: Option<String>,
    #[sea_orm(indexed)]
    pub search_result_group_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
