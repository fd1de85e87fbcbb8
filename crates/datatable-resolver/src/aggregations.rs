use std::collections::HashMap;

use crate::registry::{AggregationRegistry, AggregationType};

/// Registry of the standard aggregation kinds.
///
/// Only `histogram` and `date_histogram` carry a recoverable bucket interval.
/// `terms`, `filters`, and `range` bucket rows without one, and the metric
/// kinds do not bucket at all.
#[derive(Debug, Clone)]
pub struct StandardAggregations {
    types: HashMap<String, AggregationType>,
}

impl Default for StandardAggregations {
    fn default() -> Self {
        let types = [
            AggregationType::histogram("histogram"),
            AggregationType::histogram("date_histogram"),
            AggregationType::bucket("terms"),
            AggregationType::bucket("filters"),
            AggregationType::bucket("range"),
            AggregationType::metric("count"),
            AggregationType::metric("avg"),
            AggregationType::metric("sum"),
            AggregationType::metric("min"),
            AggregationType::metric("max"),
            AggregationType::metric("cardinality"),
        ];
        Self {
            types: types
                .into_iter()
                .map(|agg| (agg.name.clone(), agg))
                .collect(),
        }
    }
}

impl StandardAggregations {
    /// Extend the standard table with an additional kind, replacing any
    /// existing entry with the same name.
    pub fn with(mut self, agg: AggregationType) -> Self {
        self.types.insert(agg.name.clone(), agg);
        self
    }
}

impl AggregationRegistry for StandardAggregations {
    fn get(&self, kind: &str) -> Option<&AggregationType> {
        self.types.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_kinds_are_interval_bearing() {
        let aggs = StandardAggregations::default();
        assert!(aggs.get("date_histogram").unwrap().interval_bearing);
        assert!(aggs.get("histogram").unwrap().interval_bearing);
        let terms = aggs.get("terms").unwrap();
        assert!(terms.bucketed);
        assert!(!terms.interval_bearing);
        assert!(!aggs.get("avg").unwrap().bucketed);
        assert!(aggs.get("percentiles").is_none());
    }

    #[test]
    fn with_overrides_and_extends() {
        let aggs = StandardAggregations::default()
            .with(AggregationType::histogram("auto_date_histogram"));
        assert!(aggs.get("auto_date_histogram").unwrap().interval_bearing);
    }
}
