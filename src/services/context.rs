use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        connection_service::ConnectionService, delete_guard::DeleteGuardService,
        group_service::GroupService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    guard: DeleteGuardService,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
            guard: DeleteGuardService::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn group(&self) -> GroupService {
        GroupService::new(self.daos.group(), self.guard.clone())
    }

    pub fn connection(&self) -> ConnectionService {
        ConnectionService::new(self.daos.connection(), self.guard.clone())
    }

    pub fn delete_guard(&self) -> DeleteGuardService {
        self.guard.clone()
    }
}
