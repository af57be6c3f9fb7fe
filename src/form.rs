use crate::types::full_name::{FullName, ParseError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormValues {
    pub full_name: String,
}

// One slot per known field, replaced wholesale on every validation pass
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub full_name: Option<ParseError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
    }
}

pub fn validate(values: &FormValues) -> ValidationErrors {
    ValidationErrors {
        full_name: FullName::parse(values.full_name.clone()).err(),
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    value: String,
    touched: bool,
}

impl Field {
    pub fn pristine() -> Self {
        Self {
            value: String::new(),
            touched: false,
        }
    }

    pub fn touched(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Validation errors surface only once the field has been touched.
    pub fn error(&self) -> Option<ParseError> {
        if !self.touched {
            return None;
        }

        let values = FormValues {
            full_name: self.value.clone(),
        };

        validate(&values).full_name
    }
}
