pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
}

/// Actor attribution on the audit columns. The DAO layer is the only writer;
/// guard and copy code never touch these fields.
pub trait AuditStampedActiveModel {
    fn set_created_by(&mut self, actor: Option<uuid::Uuid>);
    fn set_modified_by(&mut self, actor: Option<uuid::Uuid>);
}
