use indexmap::IndexMap;
use serde::Serialize;

use super::grouping::group_by_tag;
use super::operations::{HttpMethod, OperationEntry};
use crate::parse::spec::OpenApiDocument;

/// Aggregate figures for the overview dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DerivedStatistics {
    pub endpoint_count: usize,
    pub server_count: usize,
    pub group_count: usize,
    pub security_scheme_count: usize,
    /// Uppercase method name to occurrence count, in first-encounter order.
    /// Non-standard methods are included.
    pub method_counts: IndexMap<String, usize>,
}

impl DerivedStatistics {
    pub fn method_count(&self, method: &str) -> usize {
        self.method_counts.get(method).copied().unwrap_or(0)
    }

    /// The six displayed methods with their counts, zero when absent.
    pub fn distribution(&self) -> Vec<(&'static str, usize)> {
        HttpMethod::DISPLAYED
            .iter()
            .map(|m| (*m, self.method_count(m)))
            .collect()
    }
}

pub fn compute_statistics(doc: &OpenApiDocument, operations: &[OperationEntry<'_>]) -> DerivedStatistics {
    let mut method_counts: IndexMap<String, usize> = IndexMap::new();
    for op in operations {
        *method_counts.entry(op.method.as_str().to_string()).or_default() += 1;
    }

    DerivedStatistics {
        endpoint_count: operations.len(),
        server_count: doc.servers.len(),
        group_count: group_by_tag(operations).len(),
        security_scheme_count: doc.security_scheme_count(),
        method_counts,
    }
}
