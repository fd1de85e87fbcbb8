//! `datatable-model` defines the core in-memory structures for tabular query
//! results: tables, columns, and the metadata side-channel attached to both.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the metadata resolver (`datatable-resolver`)
//! - query-execution layers that produce datatables
//! - IPC boundaries via `serde` (JSON-safe schema)
//!
//! Metadata entries are all optional and serialize sparsely: an entry that is
//! absent in memory is absent in the JSON form.

mod column;
mod dataset;
mod format;
mod table;

pub use column::{AggregationParams, ColumnMeta, DatatableColumn, SourceAggregation};
pub use dataset::{Dataset, DatasetError, Field, FieldKind};
pub use format::FormatDescriptor;
pub use table::{Datatable, DatatableRow, TableMeta, TableStatistics};
