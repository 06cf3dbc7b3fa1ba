use indexmap::IndexMap;

use super::operations::OperationEntry;
use crate::options::{OperationsSorter, ViewerOptions};

/// Operations keyed by group, in first-encounter order.
pub type OperationGroups<'v, 'a> = IndexMap<&'v str, Vec<&'v OperationEntry<'a>>>;

/// Group operations by their group key. Group order follows first
/// encounter; operations keep their encounter order within a group.
pub fn group_by_tag<'v, 'a>(operations: &'v [OperationEntry<'a>]) -> OperationGroups<'v, 'a> {
    let mut groups: OperationGroups<'v, 'a> = IndexMap::new();
    for op in operations {
        groups.entry(op.group.as_str()).or_default().push(op);
    }
    groups
}

/// Apply the optional display ordering from the viewer options. With the
/// default options the groups come back untouched.
pub fn arrange<'v, 'a>(
    mut groups: OperationGroups<'v, 'a>,
    options: &ViewerOptions,
) -> OperationGroups<'v, 'a> {
    if options.sort_tags_alphabetically {
        groups.sort_by(|a, _, b, _| a.to_lowercase().cmp(&b.to_lowercase()));
    }

    match options.operations_sorter {
        OperationsSorter::None => {}
        OperationsSorter::Alpha => {
            for ops in groups.values_mut() {
                ops.sort_by(|a, b| a.path.cmp(b.path).then(a.method.sort_rank().cmp(&b.method.sort_rank())));
            }
        }
        OperationsSorter::Method => {
            for ops in groups.values_mut() {
                ops.sort_by_key(|op| op.method.sort_rank());
            }
        }
    }

    if let Some(max) = options.max_displayed_tags {
        groups.truncate(max);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::path_item::Operation;
    use crate::project::operations::{EndpointId, HttpMethod};

    fn entry<'a>(op: &'a Operation, method: HttpMethod, path: &'a str, group: &str) -> OperationEntry<'a> {
        OperationEntry {
            id: EndpointId::new(&method, path),
            path,
            method,
            operation: op,
            group: group.to_string(),
        }
    }

    #[test]
    fn test_first_encounter_order() {
        let op = Operation::default();
        let ops = vec![
            entry(&op, HttpMethod::Get, "/b", "Beta"),
            entry(&op, HttpMethod::Get, "/a", "Alpha"),
            entry(&op, HttpMethod::Post, "/b", "Beta"),
        ];
        let groups = group_by_tag(&ops);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Beta", "Alpha"]);
        assert_eq!(groups["Beta"].len(), 2);
        assert_eq!(groups["Beta"][1].method, HttpMethod::Post);
    }

    #[test]
    fn test_arrange_defaults_keep_order() {
        let op = Operation::default();
        let ops = vec![
            entry(&op, HttpMethod::Post, "/z", "Zed"),
            entry(&op, HttpMethod::Get, "/a", "Zed"),
            entry(&op, HttpMethod::Get, "/m", "Mid"),
        ];
        let groups = arrange(group_by_tag(&ops), &ViewerOptions::default());
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Zed", "Mid"]);
        assert_eq!(groups["Zed"][0].path, "/z");
    }

    #[test]
    fn test_arrange_sorted_and_truncated() {
        let op = Operation::default();
        let ops = vec![
            entry(&op, HttpMethod::Delete, "/z", "zed"),
            entry(&op, HttpMethod::Get, "/z", "zed"),
            entry(&op, HttpMethod::Get, "/a", "Alpha"),
            entry(&op, HttpMethod::Get, "/m", "mid"),
        ];
        let options = ViewerOptions {
            sort_tags_alphabetically: true,
            operations_sorter: OperationsSorter::Method,
            max_displayed_tags: Some(2),
            ..Default::default()
        };
        let groups = arrange(group_by_tag(&ops), &options);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Alpha", "mid"]);

        let options = ViewerOptions {
            operations_sorter: OperationsSorter::Method,
            ..Default::default()
        };
        let groups = arrange(group_by_tag(&ops), &options);
        assert_eq!(groups["zed"][0].method, HttpMethod::Get);
    }
}
