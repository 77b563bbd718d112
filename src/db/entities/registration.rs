use audit_entity_derive::audited_entity;
use sea_orm::entity::prelude::*;

#[audited_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    pub confirmation_email: Option<String>,
    #[sea_orm(indexed)]
    pub group_id: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
