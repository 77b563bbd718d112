use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod forms;
pub mod groups;
pub mod public;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(groups::router(state.clone()))
        .merge(forms::router(state))
}
