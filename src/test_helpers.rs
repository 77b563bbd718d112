//! Shared fixtures for unit and integration tests: canned entity rows and a
//! router wired to a mock backing store.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, FixedOffset, TimeZone};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    db::entities::{attendance, communication, connection_request_activity, group},
    routes::router,
    state::AppState,
};

pub fn test_router(db: DatabaseConnection) -> Router {
    let cfg = AppConfig::for_tests();
    let state = AppState::new(cfg, db);
    router(Arc::clone(&state))
}

pub fn ts() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

/// An empty result set typed to the given entity model.
pub fn empty<M>() -> Vec<M> {
    Vec::new()
}

pub fn group_row(id: Uuid, name: &str) -> group::Model {
    let now = ts();
    group::Model {
        id,
        created_at: now,
        updated_at: now,
        created_by_id: None,
        modified_by_id: None,
        name: name.to_string(),
        description: None,
        is_active: true,
        is_public: false,
        is_archived: false,
        archived_at: None,
        parent_group_id: None,
    }
}

/// A child group whose `parent_group_id` points at the candidate.
pub fn group_with_parent(parent_id: Uuid) -> group::Model {
    let mut child = group_row(Uuid::new_v4(), "Child Group");
    child.parent_group_id = Some(parent_id);
    child
}

pub fn attendance_referencing_group(group_id: Uuid) -> attendance::Model {
    let now = ts();
    attendance::Model {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        created_by_id: None,
        modified_by_id: None,
        person_id: Uuid::new_v4(),
        occurred_at: now,
        did_attend: true,
        note: None,
        search_result_group_id: Some(group_id),
    }
}

pub fn communication_referencing_group(group_id: Uuid) -> communication::Model {
    let now = ts();
    communication::Model {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        created_by_id: None,
        modified_by_id: None,
        subject: Some("Weekly update".to_string()),
        message: None,
        status: "Queued".to_string(),
        list_group_id: Some(group_id),
    }
}

pub fn request_activity_referencing_type(
    activity_type_id: Uuid,
) -> connection_request_activity::Model {
    let now = ts();
    connection_request_activity::Model {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        created_by_id: None,
        modified_by_id: None,
        connection_request_id: Uuid::new_v4(),
        connection_activity_type_id: activity_type_id,
        note: None,
    }
}
