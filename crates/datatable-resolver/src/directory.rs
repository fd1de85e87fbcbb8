use std::collections::HashMap;

use async_trait::async_trait;
use datatable_model::Dataset;
use thiserror::Error;

use crate::error::BoxError;
use crate::registry::DatasetDirectory;

/// Errors reported by [`InMemoryDatasetDirectory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),
}

/// Dataset directory backed by an in-process map.
///
/// Suitable for embedding (a host application that already holds its dataset
/// definitions) and for tests. A missing id is a lookup failure at the
/// directory level; it is the directory's job to decide that, not the
/// resolver's.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetDirectory {
    datasets: HashMap<String, Dataset>,
}

impl InMemoryDatasetDirectory {
    pub fn new(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        Self {
            datasets: datasets
                .into_iter()
                .map(|dataset| (dataset.id.clone(), dataset))
                .collect(),
        }
    }

    pub fn insert(&mut self, dataset: Dataset) {
        self.datasets.insert(dataset.id.clone(), dataset);
    }
}

#[async_trait]
impl DatasetDirectory for InMemoryDatasetDirectory {
    async fn get(&self, dataset_id: &str) -> Result<Dataset, BoxError> {
        self.datasets
            .get(dataset_id)
            .cloned()
            .ok_or_else(|| DirectoryError::DatasetNotFound(dataset_id.to_string()).into())
    }
}
