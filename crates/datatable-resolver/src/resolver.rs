use std::sync::Arc;

use datatable_model::{Datatable, DatatableColumn, Dataset, Field};

use crate::error::{ResolveError, Result};
use crate::registry::{AggregationRegistry, DatasetDirectory, FormatRegistry, Formatter};

/// Resolves column and table metadata to richer domain objects.
///
/// Stateless across calls: the resolver holds only its three collaborators
/// and mutates nothing but the metadata of the column it is handed. Mutating
/// operations take `&mut DatatableColumn`, so serializing concurrent edits to
/// one column is the caller's concern by construction.
#[derive(Clone)]
pub struct MetaResolver {
    aggs: Arc<dyn AggregationRegistry>,
    datasets: Arc<dyn DatasetDirectory>,
    formats: Arc<dyn FormatRegistry>,
}

impl MetaResolver {
    pub fn new(
        aggs: Arc<dyn AggregationRegistry>,
        datasets: Arc<dyn DatasetDirectory>,
        formats: Arc<dyn FormatRegistry>,
    ) -> Self {
        Self {
            aggs,
            datasets,
            formats,
        }
    }

    /// Remove the column's field reference. No-op when absent.
    pub fn clear_field(&self, column: &mut DatatableColumn) {
        column.meta.field = None;
    }

    /// Remove the column's format descriptor, including any dependent
    /// parameters it carried. No-op when absent.
    pub fn clear_format(&self, column: &mut DatatableColumn) {
        column.meta.format = None;
    }

    /// Resolve the column's dataset reference through the directory.
    ///
    /// Returns `Ok(None)` without contacting the directory when the column
    /// carries no dataset reference. A directory failure is propagated as
    /// [`ResolveError::DatasetLookup`] with the directory's error as source.
    pub async fn dataset(&self, column: &DatatableColumn) -> Result<Option<Dataset>> {
        let Some(dataset_id) = column.meta.dataset.as_deref() else {
            return Ok(None);
        };
        let dataset = self
            .datasets
            .get(dataset_id)
            .await
            .map_err(|source| ResolveError::DatasetLookup {
                dataset_id: dataset_id.to_string(),
                source,
            })?;
        Ok(Some(dataset))
    }

    /// Resolve the column's field within its referenced dataset.
    ///
    /// Requires both the dataset and field references; if either is absent
    /// the lookup is skipped entirely and `Ok(None)` is returned. A dataset
    /// that resolves but has no field with that exact name also yields
    /// `Ok(None)`: a stale or renamed field is expected and recoverable, and
    /// the column still renders with its own (or the default) format.
    pub async fn field(&self, column: &DatatableColumn) -> Result<Option<Field>> {
        let Some(field_name) = column.meta.field.as_deref() else {
            return Ok(None);
        };
        let Some(dataset) = self.dataset(column).await? else {
            return Ok(None);
        };
        Ok(dataset.field_by_name(field_name).cloned())
    }

    /// Build the column's formatter from its descriptor. A column without a
    /// descriptor gets the registry's default formatter.
    pub fn format(&self, column: &DatatableColumn) -> Box<dyn Formatter> {
        self.formats.deserialize(column.meta.format.as_ref())
    }

    /// Attach a formatter's configuration to the column, overwriting any
    /// prior descriptor and its now-stale dependent parameters.
    pub fn set_format(&self, column: &mut DatatableColumn, formatter: &dyn Formatter) {
        column.meta.format = Some(formatter.descriptor());
    }

    /// Render one raw value with the column's formatter.
    pub fn format_value(&self, column: &DatatableColumn, value: &serde_json::Value) -> String {
        self.format(column).format(value)
    }

    /// Recover the bucket interval of the aggregation that produced this
    /// column.
    ///
    /// Yields the source aggregation's `interval` parameter only when the
    /// aggregation kind is known to the registry and histogram-like.
    /// Unrecognized kinds carry no interval rather than a guessed default.
    pub fn bucket_interval(&self, column: &DatatableColumn) -> Option<String> {
        let source = column.meta.source_agg.as_ref()?;
        match self.aggs.get(&source.kind) {
            Some(agg) if agg.interval_bearing => source.params.interval.clone(),
            Some(_) => None,
            None => {
                log::debug!(
                    "aggregation kind '{}' not in registry, treating as no interval",
                    source.kind
                );
                None
            }
        }
    }

    /// Total matching rows before pagination, if the query layer reported
    /// statistics for this table.
    pub fn total_count(&self, table: &Datatable) -> Option<u64> {
        table.meta.statistics.as_ref()?.total_count
    }
}
