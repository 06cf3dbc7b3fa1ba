use flexdoc_core::options::{OperationsSorter, ViewerOptions};
use flexdoc_core::parse;
use flexdoc_core::project::{
    DEFAULT_GROUP, DocumentView, EndpointId, HttpMethod, compute_statistics, flatten_operations,
    group_by_tag,
};
use flexdoc_core::sample;

const EDGE_CASES: &str = include_str!("fixtures/edge-cases.yaml");
const NO_SUMMARIES: &str = include_str!("fixtures/no-summaries.yaml");

#[test]
fn no_summaries_projects_nothing() {
    let doc = parse::from_yaml(NO_SUMMARIES).unwrap();
    let ops = flatten_operations(&doc);
    assert!(ops.is_empty());

    let stats = compute_statistics(&doc, &ops);
    assert_eq!(stats.endpoint_count, 0);
    assert_eq!(stats.group_count, 0);
    assert_eq!(stats.server_count, 1);
    assert!(stats.method_counts.is_empty());
}

#[test]
fn group_key_uses_first_tag_or_default() {
    let doc = parse::from_yaml(EDGE_CASES).unwrap();
    let ops = flatten_operations(&doc);
    let groups: Vec<_> = ops.iter().map(|op| (op.id.as_str(), op.group.as_str())).collect();
    assert_eq!(
        groups,
        vec![
            ("GET-/health", DEFAULT_GROUP),
            ("QUERY-/search", "Search"),
            ("GET-/reports", "responses"),
            ("PATCH-/reports", "responses"),
            ("DELETE-/reports", DEFAULT_GROUP),
        ]
    );
}

#[test]
fn summarised_operations_survive_mistyped_fields() {
    let yaml = r#"
openapi: 3.0.0
info: { title: Lenient, version: "1" }
paths:
  /files:
    post:
      summary: Upload file
      parameters:
        - { name: file, in: formData }
    get:
      summary: List files
      deprecated: "yes"
components:
  schemas:
    Upload: { type: file }
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ops = flatten_operations(&doc);
    let ids: Vec<_> = ops.iter().map(|op| op.id.as_str()).collect();
    assert_eq!(ids, vec!["POST-/files", "GET-/files"]);
}

#[test]
fn method_counts_for_get_get_post() {
    let yaml = r#"
openapi: 3.0.0
info: { title: Counts, version: "1" }
paths:
  /a:
    get: { summary: First }
    post: { summary: Create }
  /b:
    get: { summary: Second }
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ops = flatten_operations(&doc);
    let stats = compute_statistics(&doc, &ops);

    assert_eq!(stats.method_counts.len(), 2);
    assert_eq!(stats.method_counts["GET"], 2);
    assert_eq!(stats.method_counts["POST"], 1);
    assert_eq!(
        stats.distribution(),
        vec![
            ("GET", 2),
            ("POST", 1),
            ("PUT", 0),
            ("DELETE", 0),
            ("PATCH", 0),
            ("OPTIONS", 0)
        ]
    );
}

#[test]
fn nonstandard_methods_are_counted_but_not_displayed() {
    let doc = parse::from_yaml(EDGE_CASES).unwrap();
    let view = DocumentView::new(Some(&doc));
    let stats = view.statistics();

    assert_eq!(stats.endpoint_count, 5);
    assert_eq!(stats.method_count("QUERY"), 1);
    assert_eq!(stats.method_count("DELETE"), 1);
    let displayed: usize = stats.distribution().iter().map(|(_, n)| n).sum();
    assert_eq!(displayed, 4);
}

#[test]
fn sample_groups_in_first_encounter_order() {
    let doc = sample::sample_document().unwrap();
    let view = DocumentView::new(Some(&doc));
    let summary: Vec<(&str, usize)> = view
        .groups()
        .iter()
        .map(|(name, ops)| (*name, ops.len()))
        .collect();

    insta::assert_debug_snapshot!(summary, @r#"
    [
        (
            "Authentication",
            1,
        ),
        (
            "Products",
            5,
        ),
        (
            "Orders",
            2,
        ),
    ]
    "#);
}

#[test]
fn sample_statistics() {
    let doc = sample::sample_document().unwrap();
    let view = DocumentView::new(Some(&doc));
    let stats = view.statistics();
    assert_eq!(stats.endpoint_count, 8);
    assert_eq!(stats.server_count, 2);
    assert_eq!(stats.group_count, 3);
    assert_eq!(stats.security_scheme_count, 1);
    assert_eq!(stats.method_count("GET"), 3);
    assert_eq!(stats.method_count("POST"), 3);
    assert_eq!(stats.method_count("PUT"), 1);
    assert_eq!(stats.method_count("DELETE"), 1);
    assert_eq!(stats.method_count("PATCH"), 0);
}

#[test]
fn operations_keep_path_then_method_order() {
    let doc = sample::sample_document().unwrap();
    let ids: Vec<_> = flatten_operations(&doc)
        .iter()
        .map(|op| op.id.to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "POST-/auth/login",
            "GET-/products",
            "POST-/products",
            "GET-/products/{id}",
            "PUT-/products/{id}",
            "DELETE-/products/{id}",
            "GET-/orders",
            "POST-/orders",
        ]
    );
}

#[test]
fn missing_document_is_an_empty_view() {
    let view = DocumentView::new(None);
    assert!(view.is_missing());
    assert!(view.operations().is_empty());
    assert_eq!(view.statistics().endpoint_count, 0);
    assert!(view.groups().is_empty());
}

#[test]
fn find_unknown_endpoint_returns_none() {
    let doc = sample::sample_document().unwrap();
    let view = DocumentView::new(Some(&doc));
    let known = EndpointId::new(&HttpMethod::Put, "/products/{id}");
    assert_eq!(view.find(&known).unwrap().operation.operation_id.as_deref(), Some("updateProduct"));
    let stale = EndpointId::new(&HttpMethod::Patch, "/products/{id}");
    assert!(view.find(&stale).is_none());
}

#[test]
fn sidebar_groups_filter_by_search_term() {
    let doc = sample::sample_document().unwrap();
    let view = DocumentView::new(Some(&doc));
    let options = ViewerOptions::default();

    let groups = view.sidebar_groups(&options, "ORDER");
    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["Orders"]);
    assert_eq!(groups["Orders"].len(), 2);

    let groups = view.sidebar_groups(&options, "delete");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups["Products"][0].id.as_str(), "DELETE-/products/{id}");

    let groups = view.sidebar_groups(&options, "  ");
    assert_eq!(groups.len(), 3);

    assert!(view.sidebar_groups(&options, "nothing matches this").is_empty());
}

#[test]
fn sidebar_groups_apply_ordering_options() {
    let doc = sample::sample_document().unwrap();
    let view = DocumentView::new(Some(&doc));
    let options = ViewerOptions {
        sort_tags_alphabetically: true,
        operations_sorter: OperationsSorter::Alpha,
        ..Default::default()
    };
    let groups = view.sidebar_groups(&options, "");
    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["Authentication", "Orders", "Products"]);
    let products: Vec<_> = groups["Products"].iter().map(|op| op.id.as_str()).collect();
    assert_eq!(
        products,
        vec![
            "GET-/products",
            "POST-/products",
            "GET-/products/{id}",
            "PUT-/products/{id}",
            "DELETE-/products/{id}",
        ]
    );
}

#[test]
fn group_by_tag_on_flattened_operations() {
    let doc = parse::from_yaml(EDGE_CASES).unwrap();
    let ops = flatten_operations(&doc);
    let groups = group_by_tag(&ops);
    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec![DEFAULT_GROUP, "Search", "responses"]);
}
