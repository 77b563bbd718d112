use std::collections::BTreeMap;
use std::fmt;

use askama::Template;

use super::validator::RequiredFieldValidator;
use super::view_state::ItemAttributeState;

pub const BASE_CSS_CLASS: &str = "form-control";
pub const ENHANCED_CSS_CLASS: &str = "chosen-select";
pub const ENHANCED_ABSOLUTE_CSS_CLASS: &str = "chosen-select-absolute";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub value: String,
    pub selected: bool,
    pub attributes: BTreeMap<String, String>,
}

impl ListItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
            attributes: BTreeMap::new(),
        }
    }
}

/// A single-select list control with label, help, warning and required
/// decorations, composed over explicit request-scoped state. Item attributes
/// survive round-trips through [`ItemAttributeState`] snapshots; rendering
/// writes markup into any `fmt::Write` sink.
#[derive(Debug, Clone)]
pub struct DropDownList {
    pub id: String,
    pub label: String,
    pub help: String,
    pub warning: String,
    pub form_group_css_class: String,
    pub required: bool,
    pub display_required_indicator: bool,
    pub required_validator: Option<RequiredFieldValidator>,
    pub enhance_for_long_lists: bool,
    pub display_enhanced_as_absolute: bool,
    pub visible: bool,
    pub items: Vec<ListItem>,
}

impl DropDownList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            help: String::new(),
            warning: String::new(),
            form_group_css_class: String::new(),
            required: false,
            display_required_indicator: true,
            required_validator: Some(RequiredFieldValidator::default()),
            enhance_for_long_lists: false,
            display_enhanced_as_absolute: false,
            visible: true,
            items: Vec::new(),
        }
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.value.as_str())
    }

    pub fn required_error_message(&self) -> &str {
        self.required_validator
            .as_ref()
            .map(|validator| validator.error_message.as_str())
            .unwrap_or("")
    }

    pub fn set_required_error_message(&mut self, message: impl Into<String>) {
        if let Some(validator) = self.required_validator.as_mut() {
            validator.error_message = message.into();
        }
    }

    /// Runs the bound required validator against the current selection.
    /// Without a bound validator this is a no-op.
    pub fn validate(&mut self) {
        let selected = self
            .items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.value.clone());
        if self.required
            && let Some(validator) = self.required_validator.as_mut()
        {
            validator.evaluate(selected.as_deref());
        }
    }

    /// Invalid only when required AND a validator is bound AND that validator
    /// failed. An unconfigured validator never blocks validity.
    pub fn is_valid(&self) -> bool {
        !self.required
            || self
                .required_validator
                .as_ref()
                .is_none_or(RequiredFieldValidator::is_valid)
    }

    /// Rehydrates per-item attributes from the previous round-trip.
    ///
    /// The snapshot is applied positionally and only when it still lines up
    /// with the current item list; on a length mismatch the whole snapshot is
    /// discarded rather than partially applied.
    pub fn load_item_state(&mut self, state: &ItemAttributeState) {
        if state.len() != self.items.len() {
            return;
        }
        if !state.has_any_attributes() {
            return;
        }
        for (item, attrs) in self.items.iter_mut().zip(&state.0) {
            for (name, value) in attrs {
                item.attributes.insert(name.clone(), value.clone());
            }
        }
    }

    /// Captures current per-item attributes for the next round-trip.
    pub fn save_item_state(&self) -> ItemAttributeState {
        ItemAttributeState(
            self.items
                .iter()
                .map(|item| item.attributes.clone())
                .collect(),
        )
    }

    fn select_css_class(&self) -> String {
        let mut class = String::from(BASE_CSS_CLASS);
        if self.enhance_for_long_lists {
            class.push(' ');
            class.push_str(ENHANCED_CSS_CLASS);
            if self.display_enhanced_as_absolute {
                class.push(' ');
                class.push_str(ENHANCED_ABSOLUTE_CSS_CLASS);
            }
        }
        class
    }

    fn form_group_class(&self) -> String {
        let mut class = String::from("form-group");
        if !self.form_group_css_class.is_empty() {
            class.push(' ');
            class.push_str(&self.form_group_css_class);
        }
        if self.required {
            class.push_str(" required");
        }
        class
    }

    /// Renders the control into the writer: decorations, the select element
    /// with its base and enhancement classes, then the bound validator's
    /// message element. An invisible control renders nothing.
    pub fn render(&self, writer: &mut (impl fmt::Write + ?Sized)) -> askama::Result<()> {
        if !self.visible {
            return Ok(());
        }

        let template = DropDownTemplate {
            id: &self.id,
            form_group_class: self.form_group_class(),
            has_label: !self.label.is_empty(),
            label: &self.label,
            show_required_indicator: self.required && self.display_required_indicator,
            has_help: !self.help.is_empty(),
            help: &self.help,
            has_warning: !self.warning.is_empty(),
            warning: &self.warning,
            select_class: self.select_css_class(),
            items: self
                .items
                .iter()
                .map(|item| ItemView {
                    value: &item.value,
                    text: &item.text,
                    selected: item.selected,
                    attrs: item
                        .attributes
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.as_str()))
                        .collect(),
                })
                .collect(),
            validator: self
                .required_validator
                .as_ref()
                .map(|validator| ValidatorView {
                    message: &validator.error_message,
                    is_valid: validator.is_valid(),
                }),
        };
        template.render_into(writer)
    }
}

#[derive(Template)]
#[template(path = "dropdown.html")]
struct DropDownTemplate<'a> {
    id: &'a str,
    form_group_class: String,
    has_label: bool,
    label: &'a str,
    show_required_indicator: bool,
    has_help: bool,
    help: &'a str,
    has_warning: bool,
    warning: &'a str,
    select_class: String,
    items: Vec<ItemView<'a>>,
    validator: Option<ValidatorView<'a>>,
}

struct ItemView<'a> {
    value: &'a str,
    text: &'a str,
    selected: bool,
    attrs: Vec<(&'a str, &'a str)>,
}

struct ValidatorView<'a> {
    message: &'a str,
    is_valid: bool,
}
