use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::FormatDescriptor;

/// Errors that can occur when constructing a dataset definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("dataset id cannot be empty")]
    EmptyId,
    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String },
}

/// A named, queryable collection of fields (an index/table definition).
///
/// Datasets are owned by the directory that serves them; consumers only read
/// them. Field lookup is by exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    /// Human-readable title shown in pickers and column tooltips.
    pub title: String,
    fields: Vec<Field>,
}

impl Dataset {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<Self, DatasetError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DatasetError::EmptyId);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(DatasetError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self {
            id,
            title: title.into(),
            fields,
        })
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// A single attribute definition within a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub aggregatable: bool,
    /// Default display format hint for this field, if the dataset declares
    /// one. Columns may override it with their own descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatDescriptor>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            searchable: false,
            aggregatable: false,
            format: None,
        }
    }
}

/// Primitive type of a dataset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Ip,
    /// Mapped type the model does not understand; carried but not interpreted.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_field_names() {
        let err = Dataset::new(
            "logs-*",
            "Logs",
            vec![
                Field::new("bytes", FieldKind::Number),
                Field::new("bytes", FieldKind::String),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::DuplicateField {
                name: "bytes".to_string()
            }
        );
    }

    #[test]
    fn field_lookup_is_case_sensitive() {
        let dataset = Dataset::new(
            "logs-*",
            "Logs",
            vec![Field::new("bytes", FieldKind::Number)],
        )
        .unwrap();
        assert!(dataset.field_by_name("bytes").is_some());
        assert!(dataset.field_by_name("Bytes").is_none());
    }
}
