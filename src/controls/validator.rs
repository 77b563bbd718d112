/// Required-value validator bound to a form control. Starts valid and only
/// changes state through `evaluate`, mirroring a validation pass at postback.
#[derive(Debug, Clone)]
pub struct RequiredFieldValidator {
    pub error_message: String,
    pub validation_group: String,
    is_valid: bool,
}

impl RequiredFieldValidator {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            validation_group: String::new(),
            is_valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Marks the validator invalid when the bound control has no selection.
    pub fn evaluate(&mut self, selected_value: Option<&str>) {
        self.is_valid = matches!(selected_value, Some(value) if !value.is_empty());
    }
}

impl Default for RequiredFieldValidator {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::RequiredFieldValidator;

    #[test]
    fn starts_valid() {
        assert!(RequiredFieldValidator::new("Value is required").is_valid());
    }

    #[test]
    fn empty_selection_fails_evaluation() {
        let mut validator = RequiredFieldValidator::new("Value is required");
        validator.evaluate(Some(""));
        assert!(!validator.is_valid());
        validator.evaluate(None);
        assert!(!validator.is_valid());
        validator.evaluate(Some("42"));
        assert!(validator.is_valid());
    }
}
