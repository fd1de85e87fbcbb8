use async_trait::async_trait;
use datatable_model::{Dataset, FormatDescriptor};

use crate::error::BoxError;

/// A live value formatter, produced by a [`FormatRegistry`] from a
/// [`FormatDescriptor`].
///
/// Formatters are capability objects: callers hand them a raw value and get a
/// display string back, never inspecting the formatter's internals. The only
/// other thing a formatter can do is serialize its own configuration back
/// into a descriptor, which must reproduce the descriptor it was built from.
pub trait Formatter: Send + Sync {
    /// Render a raw value into a display string.
    fn format(&self, value: &serde_json::Value) -> String;

    /// Serialize this formatter's configuration.
    fn descriptor(&self) -> FormatDescriptor;
}

/// Maps serialized format descriptors to live formatters.
pub trait FormatRegistry: Send + Sync {
    /// Build a formatter from a descriptor. An absent descriptor yields the
    /// registry's default formatter; this is a defined fallback, not an
    /// error.
    fn deserialize(&self, descriptor: Option<&FormatDescriptor>) -> Box<dyn Formatter>;
}

/// Async lookup of dataset definitions by identifier.
#[async_trait]
pub trait DatasetDirectory: Send + Sync {
    /// Fetch the dataset definition for `dataset_id`. Implementations decide
    /// what a failure means (missing id, backend outage); the resolver treats
    /// any error as fatal for that single resolution and propagates it.
    async fn get(&self, dataset_id: &str) -> std::result::Result<Dataset, BoxError>;
}

/// Maps aggregation kind names to aggregation metadata.
pub trait AggregationRegistry: Send + Sync {
    /// Look up an aggregation kind. `None` means the kind is unknown to this
    /// registry; consumers treat unknown kinds as carrying no bucketing
    /// information rather than guessing.
    fn get(&self, kind: &str) -> Option<&AggregationType>;
}

/// Metadata describing one aggregation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationType {
    pub name: String,
    /// Whether the aggregation groups rows into buckets (as opposed to
    /// computing a single metric).
    pub bucketed: bool,
    /// Whether the aggregation's buckets have a width recoverable from its
    /// `interval` parameter. True only for histogram-style kinds; bucketed
    /// kinds like `terms` group without an interval.
    pub interval_bearing: bool,
}

impl AggregationType {
    pub fn metric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bucketed: false,
            interval_bearing: false,
        }
    }

    pub fn bucket(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bucketed: true,
            interval_bearing: false,
        }
    }

    pub fn histogram(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bucketed: true,
            interval_bearing: true,
        }
    }
}
