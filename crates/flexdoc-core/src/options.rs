use serde::{Deserialize, Serialize};

/// Display options for the viewer. Defaults reproduce the plain behavior:
/// document order, nothing expanded, placeholder schema preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Overrides `info.title` in headers.
    pub title: Option<String>,
    /// Show the search line in the sidebar.
    pub filter: bool,
    /// Drop the server host from code examples.
    pub hide_hostname: bool,
    pub display_operation_id: bool,
    pub doc_expansion: DocExpansion,
    pub sort_tags_alphabetically: bool,
    pub operations_sorter: OperationsSorter,
    pub max_displayed_tags: Option<usize>,
    pub schema_preview: SchemaPreview,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: None,
            filter: true,
            hide_hostname: false,
            display_operation_id: false,
            doc_expansion: DocExpansion::Collapsed,
            sort_tags_alphabetically: false,
            operations_sorter: OperationsSorter::None,
            max_displayed_tags: None,
            schema_preview: SchemaPreview::Placeholder,
        }
    }
}

/// Which sections start expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocExpansion {
    /// Nothing expanded.
    #[default]
    #[serde(rename = "none")]
    Collapsed,
    /// Every sidebar group expanded.
    List,
    /// Every group plus the detail pane's request body and responses.
    Full,
}

/// Ordering of operations inside a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationsSorter {
    #[default]
    None,
    /// By path, then method.
    Alpha,
    /// By method in GET, POST, PUT, DELETE, PATCH, OPTIONS order.
    Method,
}

/// What the response schema panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPreview {
    /// The fixed example structure.
    #[default]
    Placeholder,
    /// The response's declared top-level properties, refs unresolved.
    Declared,
}
