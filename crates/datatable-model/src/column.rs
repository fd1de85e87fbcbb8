use serde::{Deserialize, Serialize};

use crate::FormatDescriptor;

/// One column of a tabular result.
///
/// The column is created by the query-execution layer when a result set is
/// produced and lives only as long as its table. `meta` is the mutable
/// side-channel that the metadata resolver reads and edits in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatatableColumn {
    /// Unique within the owning table; row objects are keyed by this id.
    pub id: String,
    /// Display label.
    pub name: String,
    #[serde(default)]
    pub meta: ColumnMeta,
}

impl DatatableColumn {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            meta: ColumnMeta::default(),
        }
    }
}

/// Per-column metadata. Every entry is optional and independently absent.
///
/// `field` is only meaningful when `dataset` is also present, but consumers
/// must tolerate either being absent on its own (a column can reference a
/// dataset without naming a field, and a stale column can carry a dangling
/// field name).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Identifier of the dataset this column was computed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    /// Field name within the referenced dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Serialized formatter configuration for rendering raw values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatDescriptor>,
    /// Record of the aggregation that produced the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_agg: Option<SourceAggregation>,
}

impl ColumnMeta {
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_format(mut self, format: FormatDescriptor) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_source_agg(mut self, source_agg: SourceAggregation) -> Self {
        self.source_agg = Some(source_agg);
        self
    }
}

/// The aggregation that produced a column, kept so downstream consumers can
/// recover bucketing information (e.g. a histogram interval) without re-running
/// the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAggregation {
    /// Aggregation kind name (e.g. `"date_histogram"`, `"terms"`, `"avg"`).
    pub kind: String,
    #[serde(default)]
    pub params: AggregationParams,
}

impl SourceAggregation {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: AggregationParams::default(),
        }
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.params.interval = Some(interval.into());
        self
    }
}

/// Parameters the aggregation ran with. Only `interval` is interpreted by
/// this workspace; everything else is carried opaquely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationParams {
    /// Bucket width for histogram-style aggregations (e.g. `"1d"`, `"30s"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Remaining aggregation parameters, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
