use serde::{Deserialize, Serialize};

/// Serialized formatter configuration attached to a column.
///
/// A descriptor is an inert value: turning it into a live formatter is the
/// format registry's job. `params` carries formatter-specific configuration
/// (e.g. decimal places) as free-form JSON so new formatter kinds do not
/// require schema changes here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Formatter kind identifier (e.g. `"string"`, `"number"`).
    pub kind: String,
    /// Formatter-specific parameters, absent when the kind needs none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl FormatDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: None,
        }
    }

    pub fn with_params(kind: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            params: Some(params),
        }
    }
}
