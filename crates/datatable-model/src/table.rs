use serde::{Deserialize, Serialize};

use crate::DatatableColumn;

/// One row of a tabular result, keyed by column id.
pub type DatatableRow = serde_json::Map<String, serde_json::Value>;

/// A tabular result set: columns, rows, and table-level metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Datatable {
    pub columns: Vec<DatatableColumn>,
    #[serde(default)]
    pub rows: Vec<DatatableRow>,
    #[serde(default)]
    pub meta: TableMeta,
}

impl Datatable {
    pub fn new(columns: Vec<DatatableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            meta: TableMeta::default(),
        }
    }

    pub fn column_by_id(&self, id: &str) -> Option<&DatatableColumn> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn column_by_id_mut(&mut self, id: &str) -> Option<&mut DatatableColumn> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Number of rows materialized in this table. Distinct from
    /// [`TableStatistics::total_count`], which counts matches before
    /// pagination.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Table-level metadata side-channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<TableStatistics>,
}

/// Summary statistics reported by the query layer alongside the table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableStatistics {
    /// Total matching rows before pagination, independent of how many rows
    /// were materialized into the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}
