use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::group,
    error::AppError,
    services::{GroupService, ServiceContext},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub parent_group_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    50
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub parent_group_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<group::Model> for GroupResponse {
    fn from(model: group::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            parent_group_id: model.parent_group_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CanDeleteResponse {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/{id}", get(get_group).delete(delete_group))
        .route("/groups/{id}/can-delete", get(can_delete_group))
        .with_state(state)
}

fn group_service(state: &AppState) -> GroupService {
    ServiceContext::from_state(state).group()
}

async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<GroupResponse>>, AppError> {
    let groups = group_service(&state)
        .list_groups(params.page, params.page_size)
        .await?;
    Ok(Json(groups.into_iter().map(GroupResponse::from).collect()))
}

async fn create_group(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), AppError> {
    let created = group_service(&state)
        .create_group(
            &body.name,
            body.description.as_deref(),
            body.parent_group_id,
            None,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupResponse>, AppError> {
    let found = group_service(&state).require_group(&id).await?;
    Ok(Json(found.into()))
}

async fn can_delete_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CanDeleteResponse>, AppError> {
    let verdict = group_service(&state).can_delete(&id).await?;
    Ok(Json(CanDeleteResponse {
        allowed: verdict.is_deletable(),
        reason: verdict.reason().map(str::to_string),
    }))
}

async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    group_service(&state).delete_group(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
