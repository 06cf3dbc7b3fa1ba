//! Projection of an [`OpenApiDocument`] into the viewer's model.
//!
//! A [`DocumentView`] is derived once per document. Everything the sidebar,
//! the overview, and the detail pane show is read from it; selection state
//! lives elsewhere and never triggers a re-projection.

pub mod filter;
pub mod grouping;
pub mod operations;
pub mod stats;

pub use filter::filter_groups;
pub use grouping::{OperationGroups, arrange, group_by_tag};
pub use operations::{DEFAULT_GROUP, EndpointId, HttpMethod, OperationEntry, flatten_operations};
pub use stats::{DerivedStatistics, compute_statistics};

use crate::options::ViewerOptions;
use crate::parse::spec::OpenApiDocument;

/// The projected view of a document, or the placeholder state when no
/// document was supplied.
#[derive(Debug, Clone)]
pub struct DocumentView<'a> {
    document: Option<&'a OpenApiDocument>,
    operations: Vec<OperationEntry<'a>>,
    statistics: DerivedStatistics,
}

impl<'a> DocumentView<'a> {
    pub fn new(document: Option<&'a OpenApiDocument>) -> Self {
        match document {
            Some(doc) => {
                let operations = flatten_operations(doc);
                let statistics = compute_statistics(doc, &operations);
                log::debug!(
                    "projected {} operations into {} groups",
                    statistics.endpoint_count,
                    statistics.group_count
                );
                Self {
                    document,
                    operations,
                    statistics,
                }
            }
            None => Self {
                document: None,
                operations: Vec::new(),
                statistics: DerivedStatistics::default(),
            },
        }
    }

    /// True when no document was supplied.
    pub fn is_missing(&self) -> bool {
        self.document.is_none()
    }

    pub fn document(&self) -> Option<&'a OpenApiDocument> {
        self.document
    }

    pub fn operations(&self) -> &[OperationEntry<'a>] {
        &self.operations
    }

    pub fn statistics(&self) -> &DerivedStatistics {
        &self.statistics
    }

    /// Groups in document order.
    pub fn groups(&self) -> OperationGroups<'_, 'a> {
        group_by_tag(&self.operations)
    }

    /// Groups as the sidebar shows them: ordered per options, then filtered.
    pub fn sidebar_groups(&self, options: &ViewerOptions, search_term: &str) -> OperationGroups<'_, 'a> {
        filter_groups(arrange(self.groups(), options), search_term)
    }

    pub fn find(&self, id: &EndpointId) -> Option<&OperationEntry<'a>> {
        self.operations.iter().find(|op| &op.id == id)
    }
}
