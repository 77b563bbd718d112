//! Form demo page for the bound dropdown control. The GET handler renders a
//! group picker whose per-item attributes are snapshotted into a hidden
//! field; the POST handler rehydrates the control from that snapshot before
//! validating the selection.

use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::{
    controls::{DropDownList, ItemAttributeState, ListItem},
    db::entities::group,
    error::AppError,
    services::ServiceContext,
    state::AppState,
};

const PICKER_ID: &str = "group-picker";

#[derive(Debug, Deserialize)]
pub struct GroupPickerForm {
    #[serde(rename = "group-picker")]
    pub selection: Option<String>,
    pub item_state: String,
}

#[derive(Template)]
#[template(path = "group_picker.html")]
struct GroupPickerTemplate {
    control_html: String,
    item_state: String,
    message: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/forms/group-picker", get(show_picker).post(submit_picker))
        .with_state(state)
}

fn build_picker(groups: &[group::Model]) -> DropDownList {
    let mut picker = DropDownList::new(PICKER_ID);
    picker.label = "Group".to_string();
    picker.help = "Pick the group this record belongs to.".to_string();
    picker.required = true;
    picker.enhance_for_long_lists = groups.len() > 20;
    picker.set_required_error_message("Group is required.");
    picker.items.push(ListItem::new("", ""));
    for model in groups {
        let mut item = ListItem::new(model.name.clone(), model.id.to_string());
        item.attributes
            .insert("data-active".to_string(), model.is_active.to_string());
        picker.items.push(item);
    }
    picker
}

async fn load_groups(state: &AppState) -> Result<Vec<group::Model>, AppError> {
    ServiceContext::from_state(state)
        .group()
        .list_groups(1, 100)
        .await
}

fn render_page(
    picker: &DropDownList,
    message: Option<String>,
) -> Result<Html<String>, AppError> {
    let mut control_html = String::new();
    picker
        .render(&mut control_html)
        .map_err(|err| AppError::internal(format!("failed to render picker: {err}")))?;
    let item_state = picker
        .save_item_state()
        .to_json()
        .map_err(|err| AppError::internal(format!("failed to snapshot picker: {err}")))?;
    let page = GroupPickerTemplate {
        control_html,
        item_state,
        message,
    };
    let rendered = page
        .render()
        .map_err(|err| AppError::internal(format!("failed to render page: {err}")))?;
    Ok(Html(rendered))
}

async fn show_picker(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let groups = load_groups(&state).await?;
    let picker = build_picker(&groups);
    render_page(&picker, None)
}

async fn submit_picker(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GroupPickerForm>,
) -> Result<Html<String>, AppError> {
    let groups = load_groups(&state).await?;
    let mut picker = build_picker(&groups);

    let snapshot = ItemAttributeState::from_json(&form.item_state)
        .map_err(|err| AppError::invalid_argument(format!("bad item state: {err}")))?;
    picker.load_item_state(&snapshot);

    if let Some(selection) = form.selection.as_deref() {
        for item in &mut picker.items {
            item.selected = item.value == selection;
        }
    }
    picker.validate();

    let message = if picker.is_valid() {
        let chosen = picker
            .items
            .iter()
            .find(|item| item.selected && !item.value.is_empty())
            .map(|item| item.text.clone());
        chosen.map(|name| format!("You picked {name}."))
    } else {
        None
    };
    render_page(&picker, message)
}
