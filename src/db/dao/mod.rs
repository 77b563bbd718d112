use sea_orm::DatabaseConnection;

pub mod base;
pub mod base_traits;
pub mod connection_dao;
pub mod error;
pub mod group_dao;

pub use base::DaoBase;
pub use base_traits::{AuditStampedActiveModel, HasIdActiveModel, TimestampedActiveModel};
pub use connection_dao::ConnectionDao;
pub use error::{DaoLayerError, DaoResult};
pub use group_dao::GroupDao;

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn group(&self) -> GroupDao {
        DaoBase::new(&self.db)
    }

    pub fn connection(&self) -> ConnectionDao {
        DaoBase::new(&self.db)
    }
}
