use thiserror::Error;

/// Boxed error type used at the directory boundary so implementations can
/// surface whatever error type their backend produces.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by resolver operations.
///
/// A missing dataset reference, field reference, or field is never an error;
/// those cases resolve to `None`. The only fatal condition is the dataset
/// directory itself failing a lookup, which is passed through unchanged as
/// the source.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("dataset lookup failed for '{dataset_id}'")]
    DatasetLookup {
        dataset_id: String,
        #[source]
        source: BoxError,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
