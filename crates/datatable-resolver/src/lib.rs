//! `datatable-resolver` bridges the low-level columns of a
//! [`datatable_model::Datatable`] to richer domain objects: dataset and field
//! definitions, display formatters, bucket intervals, and table statistics.
//!
//! The resolver owns none of the data it touches. Each call borrows a column
//! or table, consults one of three injected collaborators (format registry,
//! dataset directory, aggregation registry), and either answers a question or
//! performs a narrow in-place metadata edit. There is no hidden global state:
//! all three collaborators are passed in at construction, so tests substitute
//! fakes freely.
//!
//! Absent references resolve to `None` without contacting the directory.
//! That short-circuit is part of the contract, not an optimization: callers
//! must not pay a lookup round-trip when there is nothing to resolve.

mod aggregations;
mod directory;
mod error;
mod formats;
mod registry;
mod resolver;

pub use aggregations::StandardAggregations;
pub use directory::{DirectoryError, InMemoryDatasetDirectory};
pub use error::{BoxError, ResolveError, Result};
pub use formats::{BooleanFormatter, NumberFormatter, SimpleFormatRegistry, StringFormatter};
pub use registry::{
    AggregationRegistry, AggregationType, DatasetDirectory, FormatRegistry, Formatter,
};
pub use resolver::MetaResolver;
