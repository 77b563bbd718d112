use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    #[sea_orm(default_value = false)]
    pub is_deceased: bool,
    #[sea_orm(indexed)]
    pub giving_group_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub primary_family_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
