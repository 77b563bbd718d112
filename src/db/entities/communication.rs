use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "communications")]
pub struct Model {
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: String,
    #[sea_orm(indexed)]
    pub list_group_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
